//! Binary-projection decomposition (4NF and 5NF).
//!
//! Both stages share one whole-schema rule: for a declared dependency, find
//! the first table whose attribute set covers lhs ∪ rhs, replace it with one
//! binary projection lhs ∪ {attr} per rhs attribute, each keyed by the lhs,
//! and stop looking at tables for that dependency. 4NF applies the rule to
//! multivalued dependencies only; 5NF applies it to every declared
//! dependency, functional ones included, because the input model declares
//! no separate join-dependency kind.

use tracing::debug;

use nf_model::{DependencyIndex, DependencyKind, Schema, Table};

use crate::attrs;

/// Which declared dependencies a pass decomposes along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DependencyFilter {
    MultivaluedOnly,
    Any,
}

fn decompose_along(
    schema: &Schema,
    dependencies: &DependencyIndex,
    filter: DependencyFilter,
) -> Schema {
    let mut out = schema.clone();
    for dependency in dependencies.iter() {
        if filter == DependencyFilter::MultivaluedOnly
            && dependency.kind != DependencyKind::Multivalued
        {
            continue;
        }
        let combined = attrs::union(&dependency.lhs, &dependency.rhs);
        // First table in declaration order covering lhs ∪ rhs; the match is
        // purely by attribute containment, never by the owning table name.
        let Some(target) = out
            .tables()
            .iter()
            .find(|t| attrs::is_subset(&combined, &t.attributes))
            .map(|t| t.name.clone())
        else {
            continue;
        };
        debug!(
            table = %target,
            lhs = ?dependency.lhs,
            rhs = ?dependency.rhs,
            kind = %dependency.kind,
            "projecting table along dependency"
        );
        for attribute in &dependency.rhs {
            let mut attributes = dependency.lhs.clone();
            attrs::push_unique(&mut attributes, attribute);
            out.insert(Table::new(
                format!("{}_{}_{}", target, dependency.lhs.join("_"), attribute),
                attributes,
                dependency.lhs.clone(),
            ));
        }
        out.remove(&target);
    }
    out
}

/// 4NF pass: decompose along every declared multivalued dependency.
pub fn decompose_multivalued(schema: &Schema, dependencies: &DependencyIndex) -> Schema {
    decompose_along(schema, dependencies, DependencyFilter::MultivaluedOnly)
}

/// 5NF pass: decompose along every declared dependency regardless of kind.
pub fn decompose_join(schema: &Schema, dependencies: &DependencyIndex) -> Schema {
    decompose_along(schema, dependencies, DependencyFilter::Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_model::Dependency;

    fn course_schema() -> Schema {
        [Table::new(
            "Course",
            ["CourseID", "Teacher", "Book"],
            ["CourseID"],
        )]
        .into_iter()
        .collect()
    }

    fn course_mvd() -> DependencyIndex {
        [Dependency::new(
            "Course",
            ["CourseID"],
            ["Teacher", "Book"],
            DependencyKind::Multivalued,
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn multivalued_dependency_projects_matched_table() {
        let out = decompose_multivalued(&course_schema(), &course_mvd());

        assert!(out.get("Course").is_none());
        let teacher = out.get("Course_CourseID_Teacher").expect("teacher table");
        assert_eq!(teacher.attributes, vec!["CourseID", "Teacher"]);
        assert_eq!(teacher.primary_key, vec!["CourseID"]);
        let book = out.get("Course_CourseID_Book").expect("book table");
        assert_eq!(book.attributes, vec!["CourseID", "Book"]);
    }

    #[test]
    fn functional_dependencies_are_ignored_by_the_multivalued_pass() {
        let dependencies: DependencyIndex = [Dependency::functional(
            "Course",
            ["CourseID"],
            ["Teacher", "Book"],
        )]
        .into_iter()
        .collect();

        let input = course_schema();
        let out = decompose_multivalued(&input, &dependencies);
        assert_eq!(out, input);
    }

    #[test]
    fn join_pass_decomposes_along_functional_dependencies_too() {
        let dependencies: DependencyIndex = [Dependency::functional(
            "Course",
            ["CourseID"],
            ["Teacher", "Book"],
        )]
        .into_iter()
        .collect();

        let out = decompose_join(&course_schema(), &dependencies);
        assert!(out.get("Course").is_none());
        assert!(out.get("Course_CourseID_Teacher").is_some());
        assert!(out.get("Course_CourseID_Book").is_some());
    }

    #[test]
    fn first_covering_table_in_declaration_order_wins() {
        let schema: Schema = [
            Table::new("Archive", ["CourseID", "Teacher", "Book", "Year"], ["Year"]),
            Table::new("Course", ["CourseID", "Teacher", "Book"], ["CourseID"]),
        ]
        .into_iter()
        .collect();

        let out = decompose_multivalued(&schema, &course_mvd());

        // Archive is declared first and covers lhs ∪ rhs, so it is the one
        // decomposed; Course survives untouched.
        assert!(out.get("Archive").is_none());
        assert!(out.get("Course").is_some());
        assert!(out.get("Archive_CourseID_Teacher").is_some());
    }

    #[test]
    fn dependency_with_no_covering_table_is_skipped() {
        let dependencies: DependencyIndex = [Dependency::new(
            "Course",
            ["CourseID"],
            ["Room"],
            DependencyKind::Multivalued,
        )]
        .into_iter()
        .collect();

        let input = course_schema();
        let out = decompose_multivalued(&input, &dependencies);
        assert_eq!(out, input);
    }
}
