//! `CREATE TABLE` rendering.
//!
//! Columns all use one placeholder type; no type inference happens here.
//! Table and column names are emitted verbatim, backtick-quoted.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use nf_model::{Schema, Table};

/// Placeholder column type for every generated column.
pub const PLACEHOLDER_TYPE: &str = "VARCHAR(255)";

/// Render one table as a `CREATE TABLE` statement.
pub fn render_table(table: &Table) -> String {
    let mut lines: Vec<String> = table
        .attributes
        .iter()
        .map(|attribute| format!("`{attribute}` {PLACEHOLDER_TYPE}"))
        .collect();
    let keys: Vec<String> = table
        .primary_key
        .iter()
        .map(|key| format!("`{key}`"))
        .collect();
    lines.push(format!("PRIMARY KEY ({})", keys.join(", ")));
    format!(
        "CREATE TABLE `{}` (\n    {}\n);",
        table.name,
        lines.join(",\n    ")
    )
}

/// Render the whole schema, one statement per table, in schema order.
pub fn render_statements(schema: &Schema) -> Vec<String> {
    schema.tables().iter().map(render_table).collect()
}

/// Persist the statements to `path`, one statement per block separated by a
/// single newline. Parent directories are created as needed.
pub fn write_script(path: &Path, statements: &[String]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    for statement in statements {
        writeln!(file, "{statement}").with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_composite_primary_key_in_stored_order() {
        let table = Table::new(
            "Enrollment",
            ["StudentID", "CourseID"],
            ["StudentID", "CourseID"],
        );
        assert_eq!(
            render_table(&table),
            "CREATE TABLE `Enrollment` (\n    \
             `StudentID` VARCHAR(255),\n    \
             `CourseID` VARCHAR(255),\n    \
             PRIMARY KEY (`StudentID`, `CourseID`)\n);"
        );
    }

    #[test]
    fn statements_follow_schema_order() {
        let schema: Schema = [
            Table::new("B", ["y"], ["y"]),
            Table::new("A", ["x"], ["x"]),
        ]
        .into_iter()
        .collect();
        let statements = render_statements(&schema);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE TABLE `B`"));
        assert!(statements[1].starts_with("CREATE TABLE `A`"));
    }
}
