pub mod dependency;
pub mod error;
pub mod level;
pub mod schema;

pub use dependency::{Dependency, DependencyIndex, DependencyKind};
pub use error::ModelError;
pub use level::NormalForm;
pub use schema::{Schema, Table};
