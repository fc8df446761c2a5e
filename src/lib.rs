//! xlexport - Excel workbook to JSON export tool
//!
//! This library converts Excel workbooks (.xlsx, .xls, .ods) into JSON files.
//! The export destination comes from a JSON configuration file; the input is
//! either a single workbook or a directory scanned recursively for workbooks.
//! Optional checker plugins can inspect candidate files before export.
//!
//! # Example
//!
//! ```no_run
//! use xlexport::cli::{run, RunOptions};
//! use std::path::PathBuf;
//!
//! let options = RunOptions {
//!     input: PathBuf::from("data/"),
//!     config: Some(PathBuf::from("Config/Config.json")),
//!     check: false,
//!     verbose: false,
//! };
//! let outcome = run(&options)?;
//! # Ok::<(), xlexport::error::ExportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod excel;
pub mod paths;
pub mod plugin;
pub mod style;

// Re-export commonly used types
pub use config::ExportConfig;
pub use convert::Converter;
pub use error::{ExportError, ExportResult};
pub use plugin::{Checker, PluginManager};
