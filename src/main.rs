use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use xlexport::cli::{self, RunOptions};
use xlexport::style;

#[derive(Parser)]
#[command(name = "xlexport")]
#[command(about = "Convert Excel workbooks to JSON files")]
#[command(long_about = "xlexport - Excel workbook to JSON export tool

Reads the export destination from Config/Config.json next to the executable
(override with --config). The input is a single workbook or a directory
scanned recursively for workbooks.

CONFIG (JSON object, at least one non-empty key):
  relativeExportPath   joined to the executable's directory
  absoluteExportPath   used verbatim

CHECKER PLUGINS (optional, --check):
  Manifest files under Plugins/Checker enable built-in data checks
  (non_empty, unique_headers) that run before any file is exported.

EXAMPLES:
  xlexport data/quarterly.xlsx          # Export one workbook
  xlexport data/                        # Export every workbook under data/
  xlexport data/ --check                # Run checker plugins first
  xlexport data/ --config my.json -v    # Custom config, verbose

EXIT CODES:
  0 on success (including 'no valid Excel files found'), a distinct
  non-zero code per fatal condition.")]
#[command(version)]
struct Cli {
    /// Excel file, or directory to scan recursively for Excel files
    input: PathBuf,

    /// Config file (default: Config/Config.json next to the executable)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run checker plugins from Plugins/Checker before exporting
    #[arg(long)]
    check: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,

    /// Show verbose progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = RunOptions {
        input: cli.input,
        config: cli.config,
        check: cli.check,
        verbose: cli.verbose,
    };

    // Terminate-on-error is decided here and nowhere else.
    let code = match cli::run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style::error(&e.to_string()));
            ExitCode::from(e.exit_code())
        }
    };

    if cli.pause {
        pause();
    }

    code
}

/// Opt-in pause, for runs launched from a file manager.
fn pause() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
