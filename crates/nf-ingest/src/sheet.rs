//! Thin CSV record-set reader.
//!
//! The two input record sets are plain CSV files with a header row. Cells
//! and headers are trimmed; a UTF-8 BOM on the first header is stripped.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

impl Sheet {
    /// Index of a column by header name, trimmed and case-insensitive.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Like [`Sheet::column_index`] but turns an absent column into an error.
    pub fn required_column(&self, path: &Path, name: &'static str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    }

    /// Cell at (row, column); short rows read as empty cells.
    pub fn cell<'a>(&'a self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(Sheet { headers, rows })
}

/// Split a comma-separated list cell into trimmed, duplicate-free items.
pub fn split_list(cell: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in cell.split(',') {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !items.iter().any(|existing| existing == trimmed) {
            items.push(trimmed.to_string());
        }
    }
    items
}
