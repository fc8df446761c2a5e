//! Workbook validation and directory scanning
//!
//! The validator is a blunt filter: a file either opens as a workbook or it
//! does not. The scanner walks a directory tree and keeps exactly the files
//! the validator accepts.

mod scanner;
mod validator;

pub use scanner::collect_excel_files;
pub use validator::is_valid_excel_file;
