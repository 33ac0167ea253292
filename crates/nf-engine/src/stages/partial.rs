//! Partial-dependency removal (2NF).
//!
//! A dependency is partial for a table when its lhs is a strict subset of
//! the primary key and its rhs touches at least one non-key attribute. Each
//! partial dependency becomes its own table keyed by the lhs; the refined
//! original keeps its key plus whatever attributes were not moved out.

use tracing::debug;

use nf_model::{Dependency, DependencyIndex, Schema, Table};

use crate::attrs;

fn is_partial(dependency: &Dependency, table: &Table, non_key: &[String]) -> bool {
    attrs::is_strict_subset(&dependency.lhs, &table.primary_key)
        && attrs::intersects(&dependency.rhs, non_key)
}

pub fn decompose(schema: &Schema, dependencies: &DependencyIndex) -> Schema {
    let mut out = Schema::new();
    for table in schema.tables() {
        let non_key = attrs::difference(&table.attributes, &table.primary_key);
        let partial: Vec<&Dependency> = dependencies
            .for_table(&table.name)
            .filter(|d| is_partial(d, table, &non_key))
            .collect();

        let mut removed: Vec<String> = Vec::new();
        for dependency in &partial {
            debug!(
                table = %table.name,
                lhs = ?dependency.lhs,
                rhs = ?dependency.rhs,
                "removing partial dependency"
            );
            out.insert(Table::new(
                format!("{}_{}", table.name, dependency.rhs.join("_")),
                attrs::union(&dependency.lhs, &dependency.rhs),
                dependency.lhs.clone(),
            ));
            for attribute in &dependency.rhs {
                attrs::push_unique(&mut removed, attribute);
            }
        }

        let remaining = attrs::union(
            &attrs::difference(&table.attributes, &removed),
            &table.primary_key,
        );
        out.insert(Table::new(
            table.name.clone(),
            remaining,
            table.primary_key.clone(),
        ));
    }
    out
}
