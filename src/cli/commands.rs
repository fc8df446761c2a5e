//! The export orchestration sequence
//!
//! Every step fails fast by returning an error; the decision to terminate
//! the process belongs to `main`, not to anything here.

use crate::config;
use crate::convert::Converter;
use crate::error::{ExportError, ExportResult};
use crate::excel;
use crate::paths;
use crate::plugin::PluginManager;
use crate::style;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Fixed config location under the executable's directory.
const CONFIG_RELATIVE_PATH: &str = "Config/Config.json";

/// Fixed checker-plugin location under the executable's directory.
const CHECKER_PLUGIN_DIR: &str = "Plugins/Checker";

/// What an invocation produced.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Every candidate file was converted.
    Exported(usize),
    /// The scanned directory held no valid workbooks. A warning, not an
    /// error: the invocation still succeeds.
    NothingToExport,
}

pub struct RunOptions {
    /// Excel file, or directory to scan recursively.
    pub input: PathBuf,
    /// Config file override; defaults to `Config/Config.json` next to the
    /// executable.
    pub config: Option<PathBuf>,
    /// Run checker plugins before exporting.
    pub check: bool,
    pub verbose: bool,
}

/// Execute the export sequence: load config, resolve the export root,
/// collect candidate files, optionally run checker plugins, then convert
/// every candidate.
pub fn run(options: &RunOptions) -> ExportResult<ExportOutcome> {
    let exe_dir = paths::exe_dir()?;

    let config_path = options
        .config
        .clone()
        .unwrap_or_else(|| exe_dir.join(CONFIG_RELATIVE_PATH));
    if options.verbose {
        println!("{}", style::info(&format!("📖 Config: {}", config_path.display())));
    }
    let config = config::load_config(&config_path)?;
    let export_root = config.resolve_export_root(&exe_dir)?;
    if options.verbose {
        println!(
            "{}",
            style::info(&format!("📂 Export root: {}", export_root.display()))
        );
    }

    let (files, scan_root) = collect_candidates(&options.input)?;
    if files.is_empty() {
        println!(
            "{}",
            style::warning(&format!(
                "no valid Excel files under {}, nothing to export",
                options.input.display()
            ))
        );
        return Ok(ExportOutcome::NothingToExport);
    }
    if options.verbose {
        println!("{}", style::info(&format!("🔍 Candidates: {}", files.len())));
    }

    if options.check {
        run_checkers(&exe_dir, &files, options.verbose)?;
    }

    let converter = Converter::new(&export_root);
    for file in &files {
        let artifact = converter.convert_file(file, &scan_root)?;
        println!(
            "   {} → {}",
            file.display(),
            artifact.display().to_string().bright_blue()
        );
    }
    println!(
        "{}",
        style::success(&format!(
            "exported {} file(s) to {}",
            files.len(),
            export_root.display()
        ))
    );
    Ok(ExportOutcome::Exported(files.len()))
}

/// Candidate files plus the root used to mirror their relative locations.
///
/// A directory is scanned recursively; a file is validated directly; anything
/// else is an invalid input path.
fn collect_candidates(input: &Path) -> ExportResult<(Vec<PathBuf>, PathBuf)> {
    if input.is_dir() {
        let files = excel::collect_excel_files(input);
        Ok((files, input.to_path_buf()))
    } else if input.is_file() {
        if !excel::is_valid_excel_file(input) {
            return Err(ExportError::InvalidInputPath(format!(
                "not a valid Excel file: {}",
                input.display()
            )));
        }
        let scan_root = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok((vec![input.to_path_buf()], scan_root))
    } else {
        Err(ExportError::InvalidInputPath(input.display().to_string()))
    }
}

/// Plugin phase: discover checkers under `Plugins/Checker` and run them over
/// the candidate list. Zero discovered checkers is fine.
fn run_checkers(exe_dir: &Path, files: &[PathBuf], verbose: bool) -> ExportResult<()> {
    let plugin_dir = exe_dir.join(CHECKER_PLUGIN_DIR);
    let mut plugins = PluginManager::new();
    let loaded = plugins.discover_checkers(&plugin_dir)?;
    if verbose {
        println!(
            "{}",
            style::info(&format!(
                "🔌 Checker plugins: {} ({})",
                loaded,
                plugins.checker_names().join(", ")
            ))
        );
    }
    plugins.exec_all_checkers(files)
}
