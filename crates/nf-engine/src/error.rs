use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The requested level token is not one of the six normal forms. This is
    /// a user error, not a pipeline failure; callers surface the message and
    /// produce no output.
    #[error("unknown normalization level {0:?}: valid levels are 1NF, 2NF, 3NF, BCNF, 4NF, 5NF")]
    InvalidLevel(String),

    /// Superkey enforcement re-selected violations without converging within
    /// the per-table iteration bound.
    #[error(
        "decomposition stalled on table {table:?}: superkey enforcement did not converge after {iterations} iterations"
    )]
    DecompositionStalled { table: String, iterations: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
