//! Platform path helpers

use crate::error::ExportResult;
use std::path::{Path, PathBuf};

/// Normalize separators to the platform convention: backslashes on Windows,
/// forward slashes everywhere else. Purely textual; the result is not checked
/// for existence.
#[cfg(windows)]
pub fn normalize_path(path: &str) -> String {
    path.replace('/', "\\")
}

/// Normalize separators to the platform convention: backslashes on Windows,
/// forward slashes everywhere else. Purely textual; the result is not checked
/// for existence.
#[cfg(not(windows))]
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Directory containing the running executable. Config and plugin locations
/// are resolved relative to it.
pub fn exe_dir() -> ExportResult<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
