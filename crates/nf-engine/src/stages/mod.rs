//! The six decomposition stages, one module per anomaly class.

pub mod atomic;
pub mod partial;
pub mod projection;
pub mod superkey;
pub mod transitive;
