//! Error type shared by the registry, the potential calculator, the cell evaluator
//! and the session. Exercise preconditions are NOT errors: they are reported inside
//! [`crate::Electrochemistry::exercises::Verdict`].

use crate::Electrochemistry::exercises::ExerciseLevel;
use crate::Electrochemistry::galvanic_cell::Side;
use thiserror::Error;

/// what is missing on a half-cell when a voltage is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    Electrode,
    Solution,
}

impl std::fmt::Display for MissingPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingPart::Electrode => write!(f, "electrode"),
            MissingPart::Solution => write!(f, "solution"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ElectrochemError {
    #[error("Species index {index} is out of range (registry holds {len} species)")]
    OutOfRange { index: usize, len: usize },
    #[error("No {1} selected on the {0} side")]
    MissingConfiguration(Side, MissingPart),
    #[error("Concentration {0} mol/L is outside of [0.0001, 2.0]")]
    OutOfDomain(f64),
    #[error("The reference electrode is only available at the introductory level, not at {0}")]
    ReferenceElectrodeLocked(ExerciseLevel),
    #[error("Unknown exercise level: {0}")]
    UnknownLevel(u8),
    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ElectrochemResult<T> = Result<T, ElectrochemError>;
