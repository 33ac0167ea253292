use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column {column:?} in {path}")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("row {row}: missing or empty field {field:?}")]
    MalformedRow { row: usize, field: String },

    #[error("row {row}: {source}")]
    InvalidTable {
        row: usize,
        #[source]
        source: nf_model::ModelError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
