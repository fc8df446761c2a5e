//! Workbook to JSON conversion

use crate::error::{ExportError, ExportResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Converts validated workbooks into JSON artifacts under a fixed export
/// root. The root is resolved once per invocation; there is no per-file
/// override.
pub struct Converter {
    export_root: PathBuf,
}

impl Converter {
    pub fn new<P: AsRef<Path>>(export_root: P) -> Self {
        Self {
            export_root: export_root.as_ref().to_path_buf(),
        }
    }

    pub fn export_root(&self) -> &Path {
        &self.export_root
    }

    /// Convert one workbook to a JSON document and write it under the export
    /// root, mirroring the source's location relative to `scan_root` with the
    /// extension swapped for `.json`. Returns the artifact path.
    ///
    /// The document maps each non-empty sheet name to an array of row
    /// objects keyed by the sheet's header row.
    pub fn convert_file(&self, source: &Path, scan_root: &Path) -> ExportResult<PathBuf> {
        let mut workbook = open_workbook_auto(source).map_err(|e| {
            ExportError::Import(format!("failed to open {}: {}", source.display(), e))
        })?;

        let mut doc = Map::new();
        let sheet_names = workbook.sheet_names().to_vec();
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                ExportError::Import(format!("sheet '{}': {}", sheet_name, e))
            })?;
            if range.is_empty() {
                continue;
            }
            doc.insert(sheet_name, Value::Array(sheet_to_rows(&range)));
        }

        let target = self.target_path(source, scan_root);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(doc))?;
        fs::write(&target, json)?;
        Ok(target)
    }

    fn target_path(&self, source: &Path, scan_root: &Path) -> PathBuf {
        let relative: PathBuf = match source.strip_prefix(scan_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => source.file_name().map(PathBuf::from).unwrap_or_default(),
        };
        self.export_root.join(relative).with_extension("json")
    }
}

/// First row is the header; remaining rows become objects keyed by it.
/// Unnamed header cells fall back to positional `col_N` keys.
fn sheet_to_rows(range: &Range<Data>) -> Vec<Value> {
    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row
            .iter()
            .enumerate()
            .map(|(idx, cell)| header_name(cell, idx))
            .collect(),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut object = Map::new();
        for (idx, header) in headers.iter().enumerate() {
            let cell = row.get(idx).unwrap_or(&Data::Empty);
            object.insert(header.clone(), cell_to_json(cell));
        }
        rows.push(Value::Object(object));
    }
    rows
}

fn header_name(cell: &Data, idx: usize) -> String {
    match cell {
        Data::String(s) if !s.is_empty() => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        _ => format!("col_{}", idx),
    }
}

fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Float(f) => Value::from(*f),
        Data::Int(i) => Value::from(*i),
        Data::Bool(b) => Value::Bool(*b),
        // Dates, durations and cell errors keep their display form
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) | Data::Error(_) => {
            Value::String(cell.to_string())
        }
    }
}
