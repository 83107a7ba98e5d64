//! # Exercise validator
//!
//! ## Aim
//! Answer checking for the guided levels of the simulator. Every check compares the
//! displayed voltmeter reading (three decimals) of a session against a value derived
//! from the metal registry and returns a tri-state [`Verdict`].
//!
//! ## Levels
//! | level | exercise | check |
//! |-------|----------|-------|
//! | 0 | introduction | none, everything allowed incl. the hydrogen electrode |
//! | 1 | identification of anode/cathode | sign of the reading |
//! | 2 | standard cell potential | `E°(right) - E°(left)` within 0.003 V |
//! | 3 | E° of the unknown species | back-solved E° within 0.02 V |
//! | 4 | concentration study | `(0.059/z)·lg(c_right/c_left)` within 0.003 V |
//! | 5, 6 | activity coefficients, activity series | not defined |
//!
//! Texts shown to the learner are not part of this module: a verdict only carries
//! the numbers needed to render one.

use crate::Electrochemistry::cell_session::CellSession;
use crate::Electrochemistry::electrochem_errors::{ElectrochemError, ElectrochemResult};
use crate::Electrochemistry::galvanic_cell::concentration_cell_voltage;
use crate::Electrochemistry::metal_registry::MetalRegistry;
use crate::Electrochemistry::nernst::STANDARD_CONCENTRATION;
use enum_dispatch::enum_dispatch;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// tolerance of the standard cell potential check, volts
pub const STANDARD_POTENTIAL_TOLERANCE: f64 = 0.003;
/// tolerance of the unknown species check, volts
pub const UNKNOWN_POTENTIAL_TOLERANCE: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExerciseLevel {
    #[default]
    Introduction = 0,
    Identification = 1,
    StandardPotential = 2,
    UnknownPotential = 3,
    ConcentrationStudy = 4,
    ActivityCoefficients = 5,
    ActivitySeries = 6,
}

impl ExerciseLevel {
    pub const ALL: [ExerciseLevel; 7] = [
        ExerciseLevel::Introduction,
        ExerciseLevel::Identification,
        ExerciseLevel::StandardPotential,
        ExerciseLevel::UnknownPotential,
        ExerciseLevel::ConcentrationStudy,
        ExerciseLevel::ActivityCoefficients,
        ExerciseLevel::ActivitySeries,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// the check of this level, if it has one
    pub fn exercise(self) -> Option<Exercise> {
        match self {
            ExerciseLevel::Identification => Some(IdentificationCheck.into()),
            ExerciseLevel::StandardPotential => Some(StandardPotentialCheck::default().into()),
            ExerciseLevel::UnknownPotential => Some(UnknownSpeciesCheck::default().into()),
            ExerciseLevel::ConcentrationStudy => Some(ConcentrationCellCheck::default().into()),
            ExerciseLevel::Introduction
            | ExerciseLevel::ActivityCoefficients
            | ExerciseLevel::ActivitySeries => None,
        }
    }

    /// levels 0..=4 have behaviour, 5 and 6 are placeholders
    pub fn is_defined(self) -> bool {
        self.number() <= 4
    }

    /// the hydrogen reference electrode may only be wired at the introduction
    pub fn allows_reference_electrode(self) -> bool {
        self == ExerciseLevel::Introduction
    }

    /// a new problem at this level regenerates the unknown species
    pub fn reseeds_unknown(self) -> bool {
        self == ExerciseLevel::UnknownPotential
    }
}

impl TryFrom<u8> for ExerciseLevel {
    type Error = ElectrochemError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ExerciseLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or(ElectrochemError::UnknownLevel(value))
    }
}

impl fmt::Display for ExerciseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} ({:?})", self.number(), self)
    }
}

/// Why a check could not judge the current configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    NoMeasurement,
    /// both concentrations must be exactly 1.00 mol/L
    NonStandardConcentration,
    UnknownSpeciesNotWired,
    /// same electrode and same solution required on both sides
    NotAConcentrationCell,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::NoMeasurement => write!(f, "no active measurement"),
            Precondition::NonStandardConcentration => {
                write!(f, "both concentrations must be 1.00 mol/L")
            }
            Precondition::UnknownSpeciesNotWired => {
                write!(f, "the unknown species is on neither side")
            }
            Precondition::NotAConcentrationCell => {
                write!(f, "electrodes and solutions differ between the sides")
            }
        }
    }
}

/// Numbers behind a verdict. `theoretical` is the registry-derived expectation,
/// `calculated` the value back-solved from the reading (unknown species only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rationale {
    pub measured: f64,
    pub theoretical: Option<f64>,
    pub calculated: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Correct(Rationale),
    Incorrect(Rationale),
    PreconditionNotMet(Precondition),
}

impl Verdict {
    fn judged(correct: bool, rationale: Rationale) -> Self {
        if correct {
            Verdict::Correct(rationale)
        } else {
            Verdict::Incorrect(rationale)
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct(_))
    }

    pub fn rationale(&self) -> Option<&Rationale> {
        match self {
            Verdict::Correct(r) | Verdict::Incorrect(r) => Some(r),
            Verdict::PreconditionNotMet(_) => None,
        }
    }
}

#[enum_dispatch]
pub trait ExerciseCheck {
    fn judge(&self, session: &CellSession, registry: &MetalRegistry)
    -> ElectrochemResult<Verdict>;
}

#[enum_dispatch(ExerciseCheck)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exercise {
    IdentificationCheck,
    StandardPotentialCheck,
    UnknownSpeciesCheck,
    ConcentrationCellCheck,
}

/// Level 1: a positive reading means left is the anode and right the cathode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IdentificationCheck;

impl ExerciseCheck for IdentificationCheck {
    fn judge(&self, session: &CellSession, _registry: &MetalRegistry) -> ElectrochemResult<Verdict> {
        let Some(measured) = session.displayed_voltage() else {
            return Ok(Verdict::PreconditionNotMet(Precondition::NoMeasurement));
        };
        let rationale = Rationale {
            measured,
            theoretical: None,
            calculated: None,
        };
        Ok(Verdict::judged(measured > 0.0, rationale))
    }
}

/// Level 2: at 1.00 mol/L the reading must equal `E°(right) - E°(left)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardPotentialCheck {
    pub tolerance: f64,
}

impl Default for StandardPotentialCheck {
    fn default() -> Self {
        Self {
            tolerance: STANDARD_POTENTIAL_TOLERANCE,
        }
    }
}

impl ExerciseCheck for StandardPotentialCheck {
    fn judge(&self, session: &CellSession, registry: &MetalRegistry) -> ElectrochemResult<Verdict> {
        if session.left().concentration() != STANDARD_CONCENTRATION
            || session.right().concentration() != STANDARD_CONCENTRATION
        {
            return Ok(Verdict::PreconditionNotMet(
                Precondition::NonStandardConcentration,
            ));
        }
        let (Some(measured), Some((left, right))) =
            (session.displayed_voltage(), session.electrodes())
        else {
            return Ok(Verdict::PreconditionNotMet(Precondition::NoMeasurement));
        };
        let theoretical =
            registry.lookup(right)?.standard_potential - registry.lookup(left)?.standard_potential;
        debug!(
            "standard potential check: measured {:.3} V, expected {:.3} V",
            measured, theoretical
        );
        let rationale = Rationale {
            measured,
            theoretical: Some(theoretical),
            calculated: None,
        };
        Ok(Verdict::judged(
            (measured - theoretical).abs() < self.tolerance,
            rationale,
        ))
    }
}

/// Level 3: back-solves E° of the unknown species from the reading, assuming both
/// half-cells at 1.00 mol/L, and compares it with the secret value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnknownSpeciesCheck {
    pub tolerance: f64,
}

impl Default for UnknownSpeciesCheck {
    fn default() -> Self {
        Self {
            tolerance: UNKNOWN_POTENTIAL_TOLERANCE,
        }
    }
}

impl ExerciseCheck for UnknownSpeciesCheck {
    fn judge(&self, session: &CellSession, registry: &MetalRegistry) -> ElectrochemResult<Verdict> {
        let (Some(measured), Some((left, right))) =
            (session.displayed_voltage(), session.electrodes())
        else {
            return Ok(Verdict::PreconditionNotMet(Precondition::NoMeasurement));
        };
        let Some(unknown) = registry.unknown_index() else {
            return Ok(Verdict::PreconditionNotMet(
                Precondition::UnknownSpeciesNotWired,
            ));
        };
        // V = E(right) - E(left)
        let calculated = if left == unknown {
            registry.lookup(right)?.standard_potential - measured
        } else if right == unknown {
            measured + registry.lookup(left)?.standard_potential
        } else {
            return Ok(Verdict::PreconditionNotMet(
                Precondition::UnknownSpeciesNotWired,
            ));
        };
        let secret = registry.lookup(unknown)?.standard_potential;
        let rationale = Rationale {
            measured,
            theoretical: Some(secret),
            calculated: Some(calculated),
        };
        Ok(Verdict::judged(
            (calculated - secret).abs() < self.tolerance,
            rationale,
        ))
    }
}

/// Level 4: same electrode and solution on both sides, the reading must match the
/// concentration cell formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentrationCellCheck {
    pub tolerance: f64,
}

impl Default for ConcentrationCellCheck {
    fn default() -> Self {
        Self {
            tolerance: STANDARD_POTENTIAL_TOLERANCE,
        }
    }
}

impl ExerciseCheck for ConcentrationCellCheck {
    fn judge(&self, session: &CellSession, registry: &MetalRegistry) -> ElectrochemResult<Verdict> {
        let (left, right) = (session.left(), session.right());
        let same_electrode = left.electrode.is_set() && left.electrode == right.electrode;
        let same_solution = left.solution.is_set() && left.solution == right.solution;
        let Some(index) = left.electrode.index().filter(|_| same_electrode && same_solution)
        else {
            return Ok(Verdict::PreconditionNotMet(
                Precondition::NotAConcentrationCell,
            ));
        };
        let Some(measured) = session.displayed_voltage() else {
            return Ok(Verdict::PreconditionNotMet(Precondition::NoMeasurement));
        };
        let species = registry.lookup(index)?;
        let theoretical =
            concentration_cell_voltage(species, left.concentration(), right.concentration());
        let rationale = Rationale {
            measured,
            theoretical: Some(theoretical),
            calculated: None,
        };
        Ok(Verdict::judged(
            (measured - theoretical).abs() < self.tolerance,
            rationale,
        ))
    }
}
