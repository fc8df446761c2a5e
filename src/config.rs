//! Export configuration loaded from Config/Config.json

use crate::error::{ExportError, ExportResult};
use crate::paths::normalize_path;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized keys of Config.json. Both fields are optional; resolution
/// requires at least one to be non-empty. Loaded once at startup, immutable
/// afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    #[serde(rename = "relativeExportPath")]
    pub relative_export_path: Option<String>,

    /// Older config files used the misspelled key `absoluteExprotPath`;
    /// accepted as an alias so they keep working.
    #[serde(rename = "absoluteExportPath", alias = "absoluteExprotPath")]
    pub absolute_export_path: Option<String>,
}

/// Read and parse the configuration file.
pub fn load_config(path: &Path) -> ExportResult<ExportConfig> {
    if !path.exists() {
        return Err(ExportError::ConfigNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ExportError::ConfigParse(e.to_string()))
}

impl ExportConfig {
    /// Resolve the export root. A non-empty `relativeExportPath` wins and is
    /// joined to `base_dir`; otherwise a non-empty `absoluteExportPath` is
    /// used verbatim. The result is resolved once per invocation and shared
    /// by every exported file.
    pub fn resolve_export_root(&self, base_dir: &Path) -> ExportResult<PathBuf> {
        if let Some(rel) = non_empty(&self.relative_export_path) {
            let joined = base_dir.join(rel);
            return Ok(PathBuf::from(normalize_path(&joined.to_string_lossy())));
        }
        if let Some(abs) = non_empty(&self.absolute_export_path) {
            return Ok(PathBuf::from(normalize_path(abs)));
        }
        Err(ExportError::MissingExportPath)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
