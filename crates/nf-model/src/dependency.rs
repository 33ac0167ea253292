use serde::{Deserialize, Serialize};
use std::fmt;

/// The label used by the dependency record set to mark a multivalued
/// dependency. Anything else (including an absent label) is functional.
pub const MULTIVALUED_LABEL: &str = "Multivalued dependencies";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyKind {
    #[default]
    Functional,
    Multivalued,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Functional => "Functional",
            DependencyKind::Multivalued => "Multivalued",
        }
    }

    /// Parse the optional type label of a dependency record.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case(MULTIVALUED_LABEL) {
            DependencyKind::Multivalued
        } else {
            DependencyKind::Functional
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dependency declared for a table of the original schema.
///
/// Declarations are made once, up front, and reused unchanged by every
/// stage; the lhs/rhs are not required to stay subsets of the owning table's
/// attribute set as decomposition rewrites the schema. Stages re-test the
/// lhs/rhs against the current generation's attributes instead of trusting
/// the owning table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Name of the table this dependency was declared for.
    pub table: String,
    /// Determinant attribute names; never empty.
    pub lhs: Vec<String>,
    /// Dependent attribute names; never empty.
    pub rhs: Vec<String>,
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn new<T, L, R>(table: T, lhs: L, rhs: R, kind: DependencyKind) -> Self
    where
        T: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            table: table.into(),
            lhs: lhs.into_iter().map(Into::into).collect(),
            rhs: rhs.into_iter().map(Into::into).collect(),
            kind,
        }
    }

    pub fn functional<T, L, R>(table: T, lhs: L, rhs: R) -> Self
    where
        T: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self::new(table, lhs, rhs, DependencyKind::Functional)
    }
}

/// Every declared dependency, in declaration order, built once at parse time
/// and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyIndex {
    dependencies: Vec<Dependency>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    /// All dependencies in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter()
    }

    /// Dependencies declared for `table`, in declaration order.
    pub fn for_table<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a Dependency> {
        self.dependencies.iter().filter(move |d| d.table == table)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl FromIterator<Dependency> for DependencyIndex {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        Self {
            dependencies: iter.into_iter().collect(),
        }
    }
}
