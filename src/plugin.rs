//! Checker plugin registry and discovery
//!
//! Plugins are compiled-in implementations of the [`Checker`] contract,
//! enabled by manifest files. Discovery scans `Plugins/Checker` under the
//! executable's directory: each `*.plugin` file enables the built-in checker
//! named by its file stem. A missing plugin directory means zero plugins,
//! never an error. Two manifests resolving to the same identifier abort
//! discovery.
//!
//! The manager keeps three collections (checkers, exporters, postprocessors);
//! discovery only ever populates checkers. The other two are contract
//! placeholders for future backends.

use crate::error::{ExportError, ExportResult};
use crate::style;
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Pre-export data check over the candidate file list. Implementations are
/// compiled in; a manifest whose stem matches `name()` enables one.
pub trait Checker {
    fn name(&self) -> &str;
    fn check_excel_data(&self, files: &[PathBuf]) -> ExportResult<()>;
}

/// Placeholder contract for alternative export backends. Never populated by
/// discovery.
pub trait Exporter {
    fn name(&self) -> &str;
}

/// Placeholder contract for post-export hooks. Never populated by discovery.
pub trait Postprocessor {
    fn name(&self) -> &str;
}

/// Manifest file extension recognized by discovery.
const MANIFEST_EXT: &str = "plugin";

#[derive(Default)]
pub struct PluginManager {
    checkers: Vec<Box<dyn Checker>>,
    exporters: Vec<Box<dyn Exporter>>,
    postprocessors: Vec<Box<dyn Postprocessor>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the discovered checkers, in discovery order.
    pub fn checker_names(&self) -> Vec<&str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    pub fn checker_count(&self) -> usize {
        self.checkers.len()
    }

    pub fn exporter_count(&self) -> usize {
        self.exporters.len()
    }

    pub fn postprocessor_count(&self) -> usize {
        self.postprocessors.len()
    }

    /// Register a checker, rejecting duplicate names.
    pub fn register_checker(&mut self, checker: Box<dyn Checker>) -> ExportResult<()> {
        if self.checkers.iter().any(|c| c.name() == checker.name()) {
            return Err(ExportError::DuplicatePlugin(checker.name().to_string()));
        }
        self.checkers.push(checker);
        Ok(())
    }

    /// Scan `dir` recursively for `*.plugin` manifests and enable the
    /// built-in checker each one names. Returns the number of checkers
    /// enabled.
    ///
    /// A missing directory yields zero plugins. Manifests whose stem begins
    /// with `_` are markers and skipped. A stem naming no built-in checker is
    /// warned about and skipped. Two manifests with the same stem are a
    /// fatal [`ExportError::DuplicatePlugin`].
    pub fn discover_checkers(&mut self, dir: &Path) -> ExportResult<usize> {
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut loaded = 0;
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| ExportError::PluginDiscovery(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(MANIFEST_EXT) {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) => s,
                None => continue,
            };
            if stem.starts_with('_') {
                continue; // marker files
            }
            if !seen.insert(stem.to_string()) {
                return Err(ExportError::DuplicatePlugin(stem.to_string()));
            }
            match builtin_checker(stem) {
                Some(checker) => {
                    self.register_checker(checker)?;
                    loaded += 1;
                }
                None => {
                    eprintln!(
                        "{}",
                        style::warning(&format!("unknown checker plugin '{}', skipped", stem))
                    );
                }
            }
        }
        Ok(loaded)
    }

    /// Invoke every discovered checker over the candidate files, in
    /// discovery order. The first failure aborts.
    pub fn exec_all_checkers(&self, files: &[PathBuf]) -> ExportResult<()> {
        for checker in &self.checkers {
            checker.check_excel_data(files)?;
        }
        Ok(())
    }
}

/// Look up a compiled-in checker by identifier.
fn builtin_checker(name: &str) -> Option<Box<dyn Checker>> {
    match name {
        "non_empty" => Some(Box::new(NonEmptyChecker)),
        "unique_headers" => Some(Box::new(UniqueHeadersChecker)),
        _ => None,
    }
}

/// Rejects workbooks that contain no data in any sheet.
struct NonEmptyChecker;

impl Checker for NonEmptyChecker {
    fn name(&self) -> &str {
        "non_empty"
    }

    fn check_excel_data(&self, files: &[PathBuf]) -> ExportResult<()> {
        for file in files {
            let mut workbook = open_workbook_auto(file)
                .map_err(|e| ExportError::Import(format!("{}: {}", file.display(), e)))?;
            let sheet_names = workbook.sheet_names().to_vec();
            let has_data = sheet_names.iter().any(|name| {
                workbook
                    .worksheet_range(name)
                    .map(|range| !range.is_empty())
                    .unwrap_or(false)
            });
            if !has_data {
                return Err(ExportError::Check(format!(
                    "workbook has no data: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }
}

/// Rejects sheets whose header row repeats a column name. Duplicate headers
/// would collide as JSON object keys.
struct UniqueHeadersChecker;

impl Checker for UniqueHeadersChecker {
    fn name(&self) -> &str {
        "unique_headers"
    }

    fn check_excel_data(&self, files: &[PathBuf]) -> ExportResult<()> {
        for file in files {
            let mut workbook = open_workbook_auto(file)
                .map_err(|e| ExportError::Import(format!("{}: {}", file.display(), e)))?;
            let sheet_names = workbook.sheet_names().to_vec();
            for sheet in sheet_names {
                let range = match workbook.worksheet_range(&sheet) {
                    Ok(range) => range,
                    Err(_) => continue,
                };
                let mut seen: HashSet<String> = HashSet::new();
                if let Some(header_row) = range.rows().next() {
                    for cell in header_row {
                        if let Data::String(s) = cell {
                            if !seen.insert(s.clone()) {
                                return Err(ExportError::Check(format!(
                                    "duplicate header '{}' in sheet '{}' of {}",
                                    s,
                                    sheet,
                                    file.display()
                                )));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
