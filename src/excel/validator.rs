use calamine::open_workbook_auto;
use std::path::Path;

/// True if the file opens as a spreadsheet workbook.
///
/// Any failure (unrecognized format, corruption, permissions) is treated
/// uniformly as "not an Excel file". Callers filtering scan candidates get a
/// boolean, never a diagnostic.
pub fn is_valid_excel_file<P: AsRef<Path>>(path: P) -> bool {
    open_workbook_auto(path).is_ok()
}
