use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target normal form for the decomposition pipeline.
///
/// The variant order is the stage order: requesting a level runs the stage
/// prefix from 1NF up to and including that level, which is why the enum
/// derives `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NormalForm {
    /// 1NF: atomic values only; multi-valued attributes split out.
    First,
    /// 2NF: no dependency on a strict subset of the primary key.
    Second,
    /// 3NF: no dependency between non-key attributes.
    Third,
    /// BCNF: every determinant is a superkey.
    BoyceCodd,
    /// 4NF: no non-trivial multivalued dependencies.
    Fourth,
    /// 5NF: no non-trivial join dependencies.
    Fifth,
}

impl NormalForm {
    /// All levels in stage order.
    pub const ALL: [NormalForm; 6] = [
        NormalForm::First,
        NormalForm::Second,
        NormalForm::Third,
        NormalForm::BoyceCodd,
        NormalForm::Fourth,
        NormalForm::Fifth,
    ];

    /// Canonical token as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalForm::First => "1NF",
            NormalForm::Second => "2NF",
            NormalForm::Third => "3NF",
            NormalForm::BoyceCodd => "BCNF",
            NormalForm::Fourth => "4NF",
            NormalForm::Fifth => "5NF",
        }
    }

    /// One-line description of the anomaly class the level forbids.
    pub fn description(&self) -> &'static str {
        match self {
            NormalForm::First => "Atomic values: multi-valued attributes are split into child tables",
            NormalForm::Second => "No partial dependencies on a strict subset of the primary key",
            NormalForm::Third => "No transitive dependencies between non-key attributes",
            NormalForm::BoyceCodd => "Every determinant is a superkey",
            NormalForm::Fourth => "No non-trivial multivalued dependencies",
            NormalForm::Fifth => "No non-trivial join dependencies",
        }
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NormalForm {
    type Err = String;

    /// Parse a level token, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1NF" => Ok(NormalForm::First),
            "2NF" => Ok(NormalForm::Second),
            "3NF" => Ok(NormalForm::Third),
            "BCNF" => Ok(NormalForm::BoyceCodd),
            "4NF" => Ok(NormalForm::Fourth),
            "5NF" => Ok(NormalForm::Fifth),
            _ => Err(format!("Unknown normal form: {}", s)),
        }
    }
}
