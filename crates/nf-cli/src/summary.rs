//! Console output for a normalize run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::NormalizeResult;

pub fn print_summary(result: &NormalizeResult) {
    println!("Generated CREATE TABLE statements ({}):", result.level);
    for statement in &result.statements {
        println!("{statement}");
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Primary Key"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in result.schema.tables() {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.attributes.len()),
            Cell::new(entry.primary_key.join(", ")),
        ]);
    }
    println!("{table}");

    match &result.script_path {
        Some(path) => println!("SQL script saved to {}", path.display()),
        None => println!("Dry run: no script written"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
