//! Staged decomposition engine for relational schema normalization.
//!
//! The engine rewrites a declared schema into an equivalent set of smaller
//! tables, one anomaly class at a time. Every stage is a pure function from
//! the previous schema generation (plus the immutable dependency index) to a
//! new generation; nothing is mutated in place and nothing is shared across
//! stages beyond the index.

mod attrs;
pub mod error;
pub mod pipeline;
pub mod stages;

pub use error::{EngineError, Result};
pub use pipeline::{normalize, parse_level};
