//! # Metal Registry
//!
//! ## Aim
//! Table of electrode metals and their electrochemical constants. Species are
//! addressed by a stable index for the whole lifetime of a session.
//!
//! ## Main Data Structures and Logic
//! - `Species`: one electrode/ion pair with its standard reduction potential E° and
//!   the number of transferred electrons n
//! - `AuxCoefficients`: A, B, C, D, F and molar mass M. Inert: no formula of the
//!   simulator reads them, the unknown species only borrows them from another metal
//! - `MetalRegistry`: the table itself. Index 0 is the hydrogen reference electrode,
//!   one species may be flagged `unknown` ("Whodatium"); its E° is secret and is
//!   regenerated by `reseed_unknown()`
//!
//! ## Usage
//! ```rust
//! use NernstKit::Electrochemistry::metal_registry::MetalRegistry;
//! use NernstKit::Electrochemistry::random_source::ScriptedSource;
//!
//! let mut registry = MetalRegistry::standard();
//! let copper = registry.lookup(2).unwrap();
//! assert_eq!(copper.symbol, "Cu");
//! // sign draw 0.9 -> positive, magnitude 0.5, copy coefficients from pool[0] (silver)
//! let mut rng = ScriptedSource::new(vec![0.9, 0.5, 0.0, 0.0]);
//! let e0 = registry.reseed_unknown(&mut rng).unwrap();
//! assert_eq!(e0, 0.5);
//! ```

use crate::Electrochemistry::electrochem_errors::{ElectrochemError, ElectrochemResult};
use crate::Electrochemistry::random_source::RandomSource;
use log::{debug, info};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// index of the hydrogen reference electrode
pub const REFERENCE_INDEX: usize = 0;
/// palette the unknown species picks its solution colour from
pub const UNKNOWN_COLORS: [&str; 6] = [
    "#ffb6c1", "#fffacd", "#f0f0f0", "#e8e8e8", "#d3d3d3", "#c0c0c0",
];

/// Auxiliary coefficients kept for activity-coefficient modelling. Not used by any
/// calculation of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct AuxCoefficients {
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub D: f64,
    pub F: f64,
    /// molar mass of the salt, g/mol
    pub M: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub symbol: String,
    /// label of the dissolved ion, e.g. "Cu²⁺"
    pub ion_formula: String,
    /// E°, volts at 1.0 mol/L and 25 °C
    pub standard_potential: f64,
    pub electron_count: u8,
    pub coefficients: AuxCoefficients,
    /// opaque presentation metadata
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub electrode_style: String,
    #[serde(default)]
    pub unknown: bool,
}

impl Species {
    /// Divisor of the Nernst correction: 1 for one-electron couples, 2 for everything else.
    pub fn z(&self) -> f64 {
        if self.electron_count == 1 { 1.0 } else { 2.0 }
    }

    /// reduction half-reaction as shown in the reference table
    pub fn reaction(&self) -> String {
        if self.electron_count == 1 {
            format!("{}⁺ + e⁻ → {}(s)", self.symbol, self.symbol)
        } else {
            format!("{}²⁺ + 2e⁻ → {}(s)", self.symbol, self.symbol)
        }
    }
}

// name, symbol, ion, E°, n, [A, B, C, D, F, M], colour, electrode style
type MetalRow = (
    &'static str,
    &'static str,
    &'static str,
    f64,
    u8,
    [f64; 6],
    &'static str,
    &'static str,
);

const STANDARD_METALS: [MetalRow; 10] = [
    ("Hydrogen", "H₂", "H₂(g)", 0.000, 1, [-1.071, 1.236, -0.651, 0.1633, 0.0, 63.0], "#e3f2fd", "default"),
    ("Silver", "Ag", "Ag⁺", 0.799, 1, [-1.115, 0.537, -0.363, 0.0956, 0.0, 169.87], "#e8e8e8", "silver"),
    ("Copper", "Cu", "Cu²⁺", 0.339, 2, [-3.547, 6.047, -5.716, 3.103, -0.676, 187.56], "#6495ed", "copper"),
    ("Lead", "Pb", "Pb²⁺", -0.126, 2, [-3.942, 4.65, -4.584, 2.472, -0.531, 331.20], "#d3d3d3", "default"),
    ("Nickel", "Ni", "Ni²⁺", -0.250, 2, [-3.596, 6.667, -6.776, 3.986, -0.906, 242.72], "#90ee90", "default"),
    ("Cadmium", "Cd", "Cd²⁺", -0.402, 2, [-3.601, 6.539, -6.672, 3.74, -0.837, 236.41], "#fffacd", "default"),
    ("Iron", "Fe", "Fe²⁺", -0.440, 2, [-3.635, 6.854, -7.267, 4.404, -1.036, 179.86], "#deb887", "default"),
    ("Zinc", "Zn", "Zn²⁺", -0.763, 2, [-3.526, 6.52, -6.51, 3.722, -0.837, 189.38], "#c0c0c0", "zinc"),
    ("Magnesium", "Mg", "Mg²⁺", -2.370, 2, [-3.648, 6.818, -6.745, 3.788, -0.837, 148.32], "#f0f0f0", "default"),
    ("Whodatium", "Wd", "Wd²⁺", -0.975, 2, [-3.648, 6.818, -6.745, 3.788, -0.837, 250.0], "#ffb6c1", "default"),
];

/// index of "Whodatium" in the standard registry
pub const WHODATIUM_INDEX: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct MetalRegistry {
    species: Vec<Species>,
}

impl Default for MetalRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl MetalRegistry {
    /// Nine real metals (hydrogen reference first) plus the unknown "Whodatium".
    pub fn standard() -> Self {
        let species = STANDARD_METALS
            .iter()
            .map(|&(name, symbol, ion, e0, n, c, color, style)| Species {
                name: name.to_string(),
                symbol: symbol.to_string(),
                ion_formula: ion.to_string(),
                standard_potential: e0,
                electron_count: n,
                coefficients: AuxCoefficients {
                    A: c[0],
                    B: c[1],
                    C: c[2],
                    D: c[3],
                    F: c[4],
                    M: c[5],
                },
                color: color.to_string(),
                electrode_style: style.to_string(),
                unknown: symbol == "Wd",
            })
            .collect();
        Self { species }
    }

    /// Builds a registry from arbitrary species. At least one species is required
    /// and at most one may be flagged unknown.
    pub fn from_species(species: Vec<Species>) -> ElectrochemResult<Self> {
        if species.is_empty() {
            return Err(ElectrochemError::InvalidRegistry(
                "registry must contain at least one species".to_string(),
            ));
        }
        let unknowns = species.iter().filter(|s| s.unknown).count();
        if unknowns > 1 {
            return Err(ElectrochemError::InvalidRegistry(format!(
                "{} species are flagged unknown, at most one is allowed",
                unknowns
            )));
        }
        if let Some(bad) = species
            .iter()
            .find(|s| !s.standard_potential.is_finite() || s.electron_count == 0)
        {
            return Err(ElectrochemError::InvalidRegistry(format!(
                "species '{}' has a non-finite E° or zero electron count",
                bad.name
            )));
        }
        Ok(Self { species })
    }

    /// parses a JSON array of species
    pub fn from_json(json: &str) -> ElectrochemResult<Self> {
        let species: Vec<Species> = serde_json::from_str(json)?;
        Self::from_species(species)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> ElectrochemResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let registry = Self::from_json(&content)?;
        info!(
            "Loaded {} species from '{}'",
            registry.len(),
            path.as_ref().display()
        );
        Ok(registry)
    }

    pub fn to_json(&self) -> ElectrochemResult<String> {
        Ok(serde_json::to_string_pretty(&self.species)?)
    }

    pub fn lookup(&self, index: usize) -> ElectrochemResult<&Species> {
        self.species.get(index).ok_or(ElectrochemError::OutOfRange {
            index,
            len: self.species.len(),
        })
    }

    /// read-only view of the whole table
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn unknown_index(&self) -> Option<usize> {
        self.species.iter().position(|s| s.unknown)
    }

    pub fn is_unknown(&self, index: usize) -> bool {
        self.unknown_index() == Some(index)
    }

    /// Species the unknown may borrow its coefficients from: everything except the
    /// reference electrode and the unknown itself.
    pub fn source_pool(&self) -> Vec<usize> {
        self.species
            .iter()
            .enumerate()
            .filter(|(i, s)| *i != REFERENCE_INDEX && !s.unknown)
            .map(|(i, _)| i)
            .collect()
    }

    /// Regenerates the unknown species: E° = ±uniform(0, 1) V with an even sign draw,
    /// auxiliary coefficients copied from a random member of the source pool and a
    /// colour from [`UNKNOWN_COLORS`]. Returns the new E°.
    pub fn reseed_unknown<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> ElectrochemResult<f64> {
        let unknown = self.unknown_index().ok_or_else(|| {
            ElectrochemError::InvalidRegistry("registry has no unknown species".to_string())
        })?;
        let pool = self.source_pool();
        if pool.is_empty() {
            return Err(ElectrochemError::InvalidRegistry(
                "no species to copy coefficients from".to_string(),
            ));
        }

        let sign = if rng.next_unit() > 0.5 { 1.0 } else { -1.0 };
        let e0 = sign * rng.next_unit();
        let donor = pool[pick(rng.next_unit(), pool.len())];
        let coefficients = self.species[donor].coefficients;
        let color = UNKNOWN_COLORS[pick(rng.next_unit(), UNKNOWN_COLORS.len())];

        let target = &mut self.species[unknown];
        target.standard_potential = e0;
        target.coefficients = coefficients;
        target.color = color.to_string();
        info!("Unknown species '{}' regenerated", target.name);
        debug!(
            "secret E° = {:.4} V, coefficients borrowed from '{}'",
            e0, self.species[donor].name
        );
        Ok(e0)
    }

    /// Reference table of standard potentials. The unknown species is never listed.
    pub fn standard_potentials_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Metal"),
            Cell::new("Reaction"),
            Cell::new("E° (V)"),
        ]));
        for s in self.species.iter().filter(|s| !s.unknown) {
            table.add_row(Row::new(vec![
                Cell::new(&s.name),
                Cell::new(&s.reaction()),
                Cell::new(&format!("{:.3}", s.standard_potential)),
            ]));
        }
        table
    }

    pub fn print_standard_potentials(&self) {
        self.standard_potentials_table().printstd();
    }
}

/// maps a uniform draw onto 0..len
fn pick(u: f64, len: usize) -> usize {
    ((u * len as f64).floor() as usize).min(len - 1)
}
