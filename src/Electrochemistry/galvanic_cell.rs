//! # Galvanic cell
//!
//! Half-cell configuration and the cell evaluator.
//!
//! The cell voltage is always `E(right) - E(left)`: the right half-cell is treated
//! as the cathode candidate. A positive voltage means the cell is wired with the
//! anode on the left, a negative one that the electrodes are wired backwards. A
//! negative voltage is a valid reading, not an error.
//!
//! For a concentration cell (same species on both sides) the two E° cancel and the
//! general formula reduces to `(0.059 / z) · lg(c_right / c_left)`, see
//! [`concentration_cell_voltage`].

use crate::Electrochemistry::electrochem_errors::{
    ElectrochemError, ElectrochemResult, MissingPart,
};
use crate::Electrochemistry::metal_registry::{MetalRegistry, Species};
use crate::Electrochemistry::nernst::{
    NERNST_FACTOR, STANDARD_CONCENTRATION, electrode_potential, validate_concentration,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// electrode or solution choice of a half-cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Unset,
    Selected(usize),
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Unset => None,
            Selection::Selected(i) => Some(i),
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

impl From<Option<usize>> for Selection {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Selection::Unset, Selection::Selected)
    }
}

/// One electrode dipped into one ion solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfCell {
    pub electrode: Selection,
    pub solution: Selection,
    concentration: f64,
}

impl Default for HalfCell {
    fn default() -> Self {
        Self {
            electrode: Selection::Unset,
            solution: Selection::Unset,
            concentration: STANDARD_CONCENTRATION,
        }
    }
}

impl HalfCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// fully configured half-cell with electrode and solution of the same species
    pub fn of_species(index: usize, concentration: f64) -> ElectrochemResult<Self> {
        Ok(Self {
            electrode: Selection::Selected(index),
            solution: Selection::Selected(index),
            concentration: validate_concentration(concentration)?,
        })
    }

    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    /// Keeps the previous value when the new one is outside [0.0001, 2.0].
    pub fn set_concentration(&mut self, concentration: f64) -> ElectrochemResult<()> {
        self.concentration = validate_concentration(concentration)?;
        Ok(())
    }

    /// false only when both are selected and differ
    pub fn electrode_matches_solution(&self) -> bool {
        match (self.electrode, self.solution) {
            (Selection::Selected(e), Selection::Selected(s)) => e == s,
            _ => true,
        }
    }

    /// electrode species, checking that both electrode and solution are chosen
    fn resolve<'a>(
        &self,
        registry: &'a MetalRegistry,
        side: Side,
    ) -> ElectrochemResult<&'a Species> {
        let electrode = self
            .electrode
            .index()
            .ok_or(ElectrochemError::MissingConfiguration(side, MissingPart::Electrode))?;
        let solution = self
            .solution
            .index()
            .ok_or(ElectrochemError::MissingConfiguration(side, MissingPart::Solution))?;
        registry.lookup(solution)?;
        registry.lookup(electrode)
    }
}

/// `E(right) - E(left)` in volts
pub fn cell_voltage(
    left: &Species,
    left_concentration: f64,
    right: &Species,
    right_concentration: f64,
) -> f64 {
    electrode_potential(right, right_concentration) - electrode_potential(left, left_concentration)
}

/// Reduced formula of a cell with the same species on both sides.
pub fn concentration_cell_voltage(
    species: &Species,
    left_concentration: f64,
    right_concentration: f64,
) -> f64 {
    (NERNST_FACTOR / species.z()) * (right_concentration / left_concentration).log10()
}

/// rounding used by the voltmeter display (three decimals)
pub fn round_display(voltage: f64) -> f64 {
    (voltage * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// positive voltage: left is the anode, right the cathode
    RightCathode,
    /// negative voltage: electrodes wired backwards
    Reversed,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellReading {
    pub left_potential: f64,
    pub right_potential: f64,
    pub voltage: f64,
    pub polarity: Polarity,
}

impl CellReading {
    /// voltage as shown on the voltmeter
    pub fn displayed_voltage(&self) -> f64 {
        round_display(self.voltage)
    }
}

/// Validates both half-cells (electrode and solution chosen, indices in range,
/// concentration in domain) and computes the cell voltage.
pub fn evaluate_cell(
    registry: &MetalRegistry,
    left: &HalfCell,
    right: &HalfCell,
) -> ElectrochemResult<CellReading> {
    let left_species = left.resolve(registry, Side::Left)?;
    let right_species = right.resolve(registry, Side::Right)?;
    let left_c = validate_concentration(left.concentration)?;
    let right_c = validate_concentration(right.concentration)?;

    let left_potential = electrode_potential(left_species, left_c);
    let right_potential = electrode_potential(right_species, right_c);
    let voltage = right_potential - left_potential;
    let polarity = if voltage > 0.0 {
        Polarity::RightCathode
    } else if voltage < 0.0 {
        Polarity::Reversed
    } else {
        Polarity::Balanced
    };
    Ok(CellReading {
        left_potential,
        right_potential,
        voltage,
        polarity,
    })
}
