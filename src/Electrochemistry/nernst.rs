//! Simplified Nernst equation for a single electrode at 25 °C:
//!
//! E = E° + (0.059 V / z) · lg(c)
//!
//! The factor 0.059 V stands for RT·ln(10)/F at 25 °C and is never recomputed from
//! temperature; activity coefficients are taken as 1 (dilute solutions).

use crate::Electrochemistry::electrochem_errors::{ElectrochemError, ElectrochemResult};
use crate::Electrochemistry::metal_registry::Species;

/// RT·ln(10)/F at 25 °C, volts
pub const NERNST_FACTOR: f64 = 0.059;
/// lowest concentration a half-cell accepts, mol/L
pub const MIN_CONCENTRATION: f64 = 0.0001;
/// highest concentration a half-cell accepts, mol/L
pub const MAX_CONCENTRATION: f64 = 2.0;
/// concentration of standard conditions, mol/L
pub const STANDARD_CONCENTRATION: f64 = 1.0;

/// Electrode potential in volts. A non-positive concentration applies no correction
/// and returns E° unchanged.
pub fn electrode_potential(species: &Species, concentration: f64) -> f64 {
    let e0 = species.standard_potential;
    if concentration <= 0.0 {
        return e0;
    }
    e0 + (NERNST_FACTOR / species.z()) * concentration.log10()
}

/// Rejects concentrations outside [0.0001, 2.0] mol/L (NaN included).
pub fn validate_concentration(concentration: f64) -> ElectrochemResult<f64> {
    if (MIN_CONCENTRATION..=MAX_CONCENTRATION).contains(&concentration) {
        Ok(concentration)
    } else {
        Err(ElectrochemError::OutOfDomain(concentration))
    }
}

/// [`electrode_potential`] restricted to the accepted concentration domain
pub fn checked_electrode_potential(
    species: &Species,
    concentration: f64,
) -> ElectrochemResult<f64> {
    let c = validate_concentration(concentration)?;
    Ok(electrode_potential(species, c))
}
