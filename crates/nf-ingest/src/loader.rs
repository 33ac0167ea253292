//! Builders for the two input record sets.
//!
//! Table records carry the declared schema; dependency records carry the
//! declared functional and multivalued dependencies. Both are declared once,
//! against the original schema, and never rewritten by the pipeline. Row
//! numbers in errors are 1-based over data rows (the header row is not
//! counted).

use std::path::Path;

use tracing::debug;

use nf_model::{Dependency, DependencyIndex, DependencyKind, Schema, Table};

use crate::error::{IngestError, Result};
use crate::sheet::{read_sheet, split_list};

pub const COL_TABLE_NAME: &str = "Table Name";
pub const COL_ATTRIBUTES: &str = "Attributes";
pub const COL_PRIMARY_KEY: &str = "Primary Key";
pub const COL_MULTIVALUED: &str = "Multi-Valued Attributes";
pub const COL_LHS: &str = "LHS (Determinants)";
pub const COL_RHS: &str = "RHS (Dependents)";
pub const COL_FD_TYPE: &str = "FD Type";

/// Load the table record set into the original schema generation.
pub fn load_schema(path: &Path) -> Result<Schema> {
    check_exists(path)?;
    let sheet = read_sheet(path)?;
    let name_col = sheet.required_column(path, COL_TABLE_NAME)?;
    let attrs_col = sheet.required_column(path, COL_ATTRIBUTES)?;
    let key_col = sheet.required_column(path, COL_PRIMARY_KEY)?;
    // The multi-valued column is optional, as are its cells.
    let multivalued_col = sheet.column_index(COL_MULTIVALUED);

    let mut schema = Schema::new();
    for (index, row) in sheet.rows.iter().enumerate() {
        let row_number = index + 1;
        let name = required_field(sheet.cell(row, name_col), row_number, COL_TABLE_NAME)?;
        let attributes = required_list(sheet.cell(row, attrs_col), row_number, COL_ATTRIBUTES)?;
        let primary_key = required_list(sheet.cell(row, key_col), row_number, COL_PRIMARY_KEY)?;
        let multivalued = multivalued_col
            .map(|col| split_list(sheet.cell(row, col)))
            .unwrap_or_default();

        let table = Table::new(name, attributes, primary_key).with_multivalued(multivalued);
        table
            .validate()
            .map_err(|source| IngestError::InvalidTable {
                row: row_number,
                source,
            })?;
        debug!(table = %table.name, attributes = table.attributes.len(), "loaded table record");
        schema.insert(table);
    }
    Ok(schema)
}

/// Load the dependency record set into the immutable dependency index.
///
/// An empty or absent `FD Type` label means functional.
pub fn load_dependencies(path: &Path) -> Result<DependencyIndex> {
    check_exists(path)?;
    let sheet = read_sheet(path)?;
    let name_col = sheet.required_column(path, COL_TABLE_NAME)?;
    let lhs_col = sheet.required_column(path, COL_LHS)?;
    let rhs_col = sheet.required_column(path, COL_RHS)?;
    let type_col = sheet.column_index(COL_FD_TYPE);

    let mut index = DependencyIndex::new();
    for (row_index, row) in sheet.rows.iter().enumerate() {
        let row_number = row_index + 1;
        let table = required_field(sheet.cell(row, name_col), row_number, COL_TABLE_NAME)?;
        let lhs = required_list(sheet.cell(row, lhs_col), row_number, COL_LHS)?;
        let rhs = required_list(sheet.cell(row, rhs_col), row_number, COL_RHS)?;
        let kind = type_col
            .map(|col| DependencyKind::from_label(sheet.cell(row, col)))
            .unwrap_or_default();
        index.push(Dependency::new(table, lhs, rhs, kind));
    }
    debug!(dependencies = index.len(), "loaded dependency records");
    Ok(index)
}

/// Load both record sets. No partial result is produced on failure.
pub fn load_inputs(
    tables_path: &Path,
    dependencies_path: &Path,
) -> Result<(Schema, DependencyIndex)> {
    let schema = load_schema(tables_path)?;
    let dependencies = load_dependencies(dependencies_path)?;
    Ok((schema, dependencies))
}

fn check_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    Err(IngestError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    })
}

fn required_field(cell: &str, row: usize, field: &str) -> Result<String> {
    if cell.is_empty() {
        return Err(IngestError::MalformedRow {
            row,
            field: field.to_string(),
        });
    }
    Ok(cell.to_string())
}

fn required_list(cell: &str, row: usize, field: &str) -> Result<Vec<String>> {
    let items = split_list(cell);
    if items.is_empty() {
        return Err(IngestError::MalformedRow {
            row,
            field: field.to_string(),
        });
    }
    Ok(items)
}
