//! Pipeline controller: runs the ordered stage prefix for a target level.
//!
//! Each level maps to the fixed prefix 1NF → 2NF → 3NF → BCNF → 4NF → 5NF
//! cut off at that level, always starting from the atomicity pass. Stages
//! take the previous generation and the immutable dependency index by
//! reference and return a fresh generation; only the final one is kept.

use std::str::FromStr;

use tracing::{info, info_span};

use nf_model::{DependencyIndex, NormalForm, Schema};

use crate::error::{EngineError, Result};
use crate::stages::{atomic, partial, projection, superkey, transitive};

/// Parse a user-supplied level token.
///
/// An unrecognized token is the non-fatal [`EngineError::InvalidLevel`]:
/// callers report it and produce no output.
pub fn parse_level(token: &str) -> Result<NormalForm> {
    NormalForm::from_str(token).map_err(|_| EngineError::InvalidLevel(token.to_string()))
}

/// Run the stage prefix required to reach `level`.
pub fn normalize(
    schema: &Schema,
    dependencies: &DependencyIndex,
    level: NormalForm,
) -> Result<Schema> {
    let span = info_span!("normalize", level = %level);
    let _guard = span.enter();

    let mut current = atomic::decompose(schema);
    if level >= NormalForm::Second {
        current = partial::decompose(&current, dependencies);
    }
    if level >= NormalForm::Third {
        current = transitive::decompose(&current, dependencies);
    }
    if level >= NormalForm::BoyceCodd {
        current = superkey::decompose(&current, dependencies)?;
    }
    if level >= NormalForm::Fourth {
        current = projection::decompose_multivalued(&current, dependencies);
    }
    if level >= NormalForm::Fifth {
        current = projection::decompose_join(&current, dependencies);
    }

    info!(
        input_tables = schema.len(),
        output_tables = current.len(),
        "normalization complete"
    );
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_token_is_invalid() {
        let error = parse_level("6NF").unwrap_err();
        assert_eq!(error, EngineError::InvalidLevel("6NF".to_string()));

        assert_eq!(parse_level("bcnf"), Ok(NormalForm::BoyceCodd));
    }
}
