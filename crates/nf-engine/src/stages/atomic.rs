//! Atomicity decomposition (1NF).
//!
//! Every multi-valued attribute `m` of a table is split into a child table
//! `<table>_<m>` keyed by the whole of (primary key ∪ {m}); the refined
//! original keeps its key and loses the multi-valued attributes. Children
//! come out ahead of their refined original, matching the declared
//! insertion order of the source system.

use tracing::debug;

use nf_model::{Schema, Table};

use crate::attrs;

pub fn decompose(schema: &Schema) -> Schema {
    let mut out = Schema::new();
    for table in schema.tables() {
        for attribute in &table.multivalued {
            let mut key = table.primary_key.clone();
            attrs::push_unique(&mut key, attribute);
            debug!(table = %table.name, attribute = %attribute, "splitting multi-valued attribute");
            out.insert(Table::new(
                format!("{}_{}", table.name, attribute),
                key.clone(),
                key,
            ));
        }
        let attributes = attrs::difference(&table.attributes, &table.multivalued);
        out.insert(Table::new(
            table.name.clone(),
            attributes,
            table.primary_key.clone(),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_multivalued_attribute_into_child_table() {
        let schema: Schema = [Table::new(
            "Employee",
            ["EmpID", "Name", "Skill"],
            ["EmpID"],
        )
        .with_multivalued(["Skill"])]
        .into_iter()
        .collect();

        let out = decompose(&schema);

        assert_eq!(out.len(), 2);
        let child = out.get("Employee_Skill").expect("child table");
        assert_eq!(child.attributes, vec!["EmpID", "Skill"]);
        assert_eq!(child.primary_key, vec!["EmpID", "Skill"]);

        let refined = out.get("Employee").expect("refined original");
        assert_eq!(refined.attributes, vec!["EmpID", "Name"]);
        assert_eq!(refined.primary_key, vec!["EmpID"]);
        assert!(refined.multivalued.is_empty());
    }

    #[test]
    fn table_without_multivalued_attributes_passes_through() {
        let schema: Schema = [Table::new("Order", ["OrderID", "Total"], ["OrderID"])]
            .into_iter()
            .collect();

        let out = decompose(&schema);

        assert_eq!(out.len(), 1);
        assert_eq!(out.get("Order"), schema.get("Order"));
    }

    #[test]
    fn children_precede_their_refined_original() {
        let schema: Schema = [Table::new("Employee", ["EmpID", "Skill", "Phone"], ["EmpID"])
            .with_multivalued(["Skill", "Phone"])]
        .into_iter()
        .collect();

        let out = decompose(&schema);
        let names: Vec<&str> = out.tables().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Employee_Skill", "Employee_Phone", "Employee"]);
    }
}
