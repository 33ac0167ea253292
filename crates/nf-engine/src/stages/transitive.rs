//! Transitive-dependency removal (3NF).
//!
//! A dependency is transitive for a table when its lhs is not the primary
//! key, the lhs lies entirely inside the non-key attributes, and the rhs
//! touches a non-key attribute. Each offending rhs attribute is split off
//! on its own, into a table `<table>_<attr>` keyed by the lhs.

use tracing::debug;

use nf_model::{DependencyIndex, Schema, Table};

use crate::attrs;

pub fn decompose(schema: &Schema, dependencies: &DependencyIndex) -> Schema {
    let mut out = Schema::new();
    for table in schema.tables() {
        let non_key = attrs::difference(&table.attributes, &table.primary_key);

        // Split each transitive dependency per offending rhs attribute.
        let mut splits: Vec<(Vec<String>, String)> = Vec::new();
        for dependency in dependencies.for_table(&table.name) {
            if attrs::set_eq(&dependency.lhs, &table.primary_key)
                || !attrs::is_subset(&dependency.lhs, &non_key)
            {
                continue;
            }
            for attribute in &dependency.rhs {
                if attrs::contains(&non_key, attribute) {
                    splits.push((dependency.lhs.clone(), attribute.clone()));
                }
            }
        }

        let mut removed: Vec<String> = Vec::new();
        for (lhs, attribute) in &splits {
            debug!(table = %table.name, lhs = ?lhs, attribute = %attribute, "removing transitive dependency");
            let mut attributes = lhs.clone();
            attrs::push_unique(&mut attributes, attribute);
            out.insert(Table::new(
                format!("{}_{}", table.name, attribute),
                attributes,
                lhs.clone(),
            ));
            attrs::push_unique(&mut removed, attribute);
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

#[cfg(test)]
mod tests {
    use super::*;
    use nf_model::Dependency;

    fn employee() -> Schema {
        [Table::new(
            "Employee",
            ["EmpID", "DeptID", "DeptName"],
            ["EmpID"],
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn splits_transitive_dependency_per_attribute() {
        let dependencies: DependencyIndex =
            [Dependency::functional("Employee", ["DeptID"], ["DeptName"])]
                .into_iter()
                .collect();

        let out = decompose(&employee(), &dependencies);

        let split = out.get("Employee_DeptName").expect("split table");
        assert_eq!(split.attributes, vec!["DeptID", "DeptName"]);
        assert_eq!(split.primary_key, vec!["DeptID"]);

        let refined = out.get("Employee").expect("refined original");
        assert_eq!(refined.attributes, vec!["EmpID", "DeptID"]);
        assert_eq!(refined.primary_key, vec!["EmpID"]);
    }

    #[test]
    fn multi_attribute_rhs_splits_one_table_per_attribute() {
        let schema: Schema = [Table::new(
            "Employee",
            ["EmpID", "DeptID", "DeptName", "DeptFloor"],
            ["EmpID"],
        )]
        .into_iter()
        .collect();
        let dependencies: DependencyIndex = [Dependency::functional(
            "Employee",
            ["DeptID"],
            ["DeptName", "DeptFloor"],
        )]
        .into_iter()
        .collect();

        let out = decompose(&schema, &dependencies);

        assert!(out.get("Employee_DeptName").is_some());
        assert!(out.get("Employee_DeptFloor").is_some());
        let refined = out.get("Employee").unwrap();
        assert_eq!(refined.attributes, vec!["EmpID", "DeptID"]);
    }

    #[test]
    fn key_determined_dependency_is_not_transitive() {
        let dependencies: DependencyIndex =
            [Dependency::functional("Employee", ["EmpID"], ["DeptName"])]
                .into_iter()
                .collect();

        let input = employee();
        let out = decompose(&input, &dependencies);
        assert_eq!(out, input);
    }
}
