use thiserror::Error;

/// Violations of the structural invariants a [`crate::Table`] must satisfy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("table {table:?} has an empty attribute list")]
    EmptyAttributes { table: String },

    #[error("table {table:?} has an empty primary key")]
    EmptyPrimaryKey { table: String },

    #[error("primary key attribute {attribute:?} is not an attribute of table {table:?}")]
    KeyNotInAttributes { table: String, attribute: String },

    #[error("multi-valued attribute {attribute:?} is not an attribute of table {table:?}")]
    MultivaluedNotInAttributes { table: String, attribute: String },

    #[error("multi-valued attribute {attribute:?} is part of the primary key of table {table:?}")]
    MultivaluedKeyAttribute { table: String, attribute: String },
}
