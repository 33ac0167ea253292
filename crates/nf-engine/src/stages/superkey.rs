//! Superkey enforcement (BCNF).
//!
//! Per table, the declared dependencies are scanned against a shrinking
//! working set of remaining attributes: a dependency violates BCNF when its
//! lhs is neither the primary key (as a set) nor covered by the remaining
//! attributes. The covered-lhs acceptance is loose: any lhs fully inside
//! the remaining set is treated as if it were a superkey.
//!
//! The scan re-reads the same declared dependency list while the working
//! set shrinks, so a processed violation can re-trigger. The loop is
//! bounded by the number of dependencies declared for the table; exceeding
//! the bound surfaces as [`EngineError::DecompositionStalled`] instead of
//! looping forever.

use tracing::debug;

use nf_model::{Dependency, DependencyIndex, Schema, Table};

use crate::attrs;
use crate::error::{EngineError, Result};

fn violates(dependency: &Dependency, table: &Table, remaining: &[String]) -> bool {
    !attrs::set_eq(&dependency.lhs, &table.primary_key)
        && !attrs::is_subset(&dependency.lhs, remaining)
}

pub fn decompose(schema: &Schema, dependencies: &DependencyIndex) -> Result<Schema> {
    let mut out = Schema::new();
    for table in schema.tables() {
        let declared: Vec<&Dependency> = dependencies.for_table(&table.name).collect();
        let mut remaining = table.attributes.clone();
        let fuel = declared.len();
        let mut iterations = 0usize;

        loop {
            let Some(violation) = declared.iter().find(|d| violates(d, table, &remaining)) else {
                break;
            };
            if iterations >= fuel {
                return Err(EngineError::DecompositionStalled {
                    table: table.name.clone(),
                    iterations,
                });
            }
            iterations += 1;
            debug!(
                table = %table.name,
                lhs = ?violation.lhs,
                rhs = ?violation.rhs,
                iteration = iterations,
                "decomposing superkey violation"
            );
            out.insert(Table::new(
                format!("{}_{}", table.name, violation.rhs.join("_")),
                attrs::union(&violation.lhs, &violation.rhs),
                violation.lhs.clone(),
            ));
            remaining = attrs::difference(&remaining, &violation.rhs);
        }

        out.insert(Table::new(
            table.name.clone(),
            remaining,
            table.primary_key.clone(),
        ));
    }
    Ok(out)
}
