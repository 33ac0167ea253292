use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A table in one generation of the schema.
///
/// Attribute lists are declaration-ordered and duplicate-free but are treated
/// as sets by the decomposition stages; the stored order only decides how
/// columns come out in generated DDL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub attributes: Vec<String>,
    /// Ordered subset of `attributes`.
    pub primary_key: Vec<String>,
    /// Subset of `attributes`; only meaningful before atomicity
    /// decomposition runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multivalued: Vec<String>,
}

impl Table {
    pub fn new<N, A, K>(name: N, attributes: A, primary_key: K) -> Self
    where
        N: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
            primary_key: primary_key.into_iter().map(Into::into).collect(),
            multivalued: Vec::new(),
        }
    }

    /// Attach the multi-valued attribute list declared for this table.
    #[must_use]
    pub fn with_multivalued<M>(mut self, multivalued: M) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
    {
        self.multivalued = multivalued.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }

    /// Check the structural invariants: attributes non-empty, primary key a
    /// non-empty subset of the attributes, multi-valued attributes a subset
    /// of the attributes.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.attributes.is_empty() {
            return Err(ModelError::EmptyAttributes {
                table: self.name.clone(),
            });
        }
        if self.primary_key.is_empty() {
            return Err(ModelError::EmptyPrimaryKey {
                table: self.name.clone(),
            });
        }
        for key in &self.primary_key {
            if !self.has_attribute(key) {
                return Err(ModelError::KeyNotInAttributes {
                    table: self.name.clone(),
                    attribute: key.clone(),
                });
            }
        }
        for attribute in &self.multivalued {
            if !self.has_attribute(attribute) {
                return Err(ModelError::MultivaluedNotInAttributes {
                    table: self.name.clone(),
                    attribute: attribute.clone(),
                });
            }
            // A multi-valued key attribute would leave the refined table
            // keyed by an attribute it no longer carries after the
            // atomicity split.
            if self.primary_key.contains(attribute) {
                return Err(ModelError::MultivaluedKeyAttribute {
                    table: self.name.clone(),
                    attribute: attribute.clone(),
                });
            }
        }
        Ok(())
    }

}

/// One generation of the schema: a declaration-ordered set of tables with
/// unique names.
///
/// Stages never mutate their input generation; each stage builds a fresh
/// `Schema` and the pipeline keeps only the last one. Iteration order is
/// declaration order, so every "first matching table" rule in the stages is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing any existing table with the same name in place.
    pub fn insert(&mut self, table: Table) {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Table> {
        let index = self.tables.iter().position(|t| t.name == name)?;
        Some(self.tables.remove(index))
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<Table> for Schema {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for table in iter {
            schema.insert(table);
        }
        schema
    }
}
