use std::path::PathBuf;
use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Config parsing error: {0}")]
    ConfigParse(String),

    #[error("No export path configured: set relativeExportPath or absoluteExportPath in Config.json")]
    MissingExportPath,

    #[error("Invalid input path: {0}")]
    InvalidInputPath(String),

    #[error("Plugin discovery error: {0}")]
    PluginDiscovery(String),

    #[error("Duplicate checker plugin: {0}")]
    DuplicatePlugin(String),

    #[error("Data check failed: {0}")]
    Check(String),

    #[error("Excel import error: {0}")]
    Import(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Process exit code for this error. The decision to terminate is made
    /// exactly once, in `main`; everything below returns errors up the stack.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExportError::Io(_) => 10,
            ExportError::ConfigNotFound(_) => 11,
            ExportError::ConfigParse(_) => 12,
            ExportError::MissingExportPath => 13,
            ExportError::InvalidInputPath(_) => 14,
            ExportError::PluginDiscovery(_) => 15,
            ExportError::DuplicatePlugin(_) => 16,
            ExportError::Check(_) => 17,
            ExportError::Import(_) => 18,
            ExportError::Json(_) => 19,
        }
    }
}
