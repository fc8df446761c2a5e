use crate::excel::validator::is_valid_excel_file;
use crate::paths::normalize_path;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect every file under `root` that opens as a workbook.
///
/// Every recursion step uses the fully qualified path, so nested directories
/// are scanned where they actually live. Symlinks are not followed, which
/// rules out infinite descent through cyclic links. Entries are visited in
/// file-name order, making the result deterministic across platforms.
/// Unreadable entries are skipped: they cannot be valid workbooks.
pub fn collect_excel_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let full = PathBuf::from(normalize_path(&entry.path().to_string_lossy()));
        if is_valid_excel_file(&full) {
            files.push(full);
        }
    }
    files
}
