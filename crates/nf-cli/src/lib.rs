//! CLI library components for the schema normalizer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
