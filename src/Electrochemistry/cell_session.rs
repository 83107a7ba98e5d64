//! # Cell session
//!
//! Explicit state of one learner working at the simulator: two half-cells, the
//! active level and the last voltmeter reading. The metal registry is not owned by
//! the session; it is passed in wherever species data or the unknown-species reseed
//! is needed, so two sessions never share mutable state by accident.
//!
//! Any configuration change (electrode, solution, concentration, swap, level) drops
//! the measurement: a reading always belongs to the configuration it was taken on.

use crate::Electrochemistry::electrochem_errors::{ElectrochemError, ElectrochemResult};
use crate::Electrochemistry::exercises::{ExerciseCheck, ExerciseLevel, Verdict};
use crate::Electrochemistry::galvanic_cell::{
    CellReading, HalfCell, Selection, Side, evaluate_cell,
};
use crate::Electrochemistry::metal_registry::{MetalRegistry, REFERENCE_INDEX};
use crate::Electrochemistry::random_source::RandomSource;
use log::{info, warn};
use prettytable::{Cell, Row, Table};

/// a voltmeter reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub reading: CellReading,
    /// voltage rounded to three decimals, the value exercises are judged on
    pub displayed: f64,
}

/// electrode and solution of one side belong to different species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionMismatch {
    pub side: Side,
    pub electrode: usize,
    pub solution: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellSession {
    left: HalfCell,
    right: HalfCell,
    level: ExerciseLevel,
    measurement: Option<Measurement>,
}

impl CellSession {
    pub fn new(level: ExerciseLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn left(&self) -> &HalfCell {
        &self.left
    }

    pub fn right(&self) -> &HalfCell {
        &self.right
    }

    pub fn half(&self, side: Side) -> &HalfCell {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn half_mut(&mut self, side: Side) -> &mut HalfCell {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn level(&self) -> ExerciseLevel {
        self.level
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        self.measurement.as_ref()
    }

    pub fn is_measuring(&self) -> bool {
        self.measurement.is_some()
    }

    pub fn displayed_voltage(&self) -> Option<f64> {
        self.measurement.map(|m| m.displayed)
    }

    /// (left, right) electrode indices when both are selected
    pub fn electrodes(&self) -> Option<(usize, usize)> {
        Some((self.left.electrode.index()?, self.right.electrode.index()?))
    }

    pub fn set_electrode(&mut self, side: Side, electrode: Selection) {
        self.half_mut(side).electrode = electrode;
        self.measurement = None;
    }

    /// Mismatching electrode and solution are allowed; the mismatch is reported back.
    pub fn set_solution(&mut self, side: Side, solution: Selection) -> Option<SolutionMismatch> {
        let half = self.half_mut(side);
        half.solution = solution;
        let mismatch = match (half.electrode, half.solution) {
            (Selection::Selected(electrode), Selection::Selected(solution))
                if electrode != solution =>
            {
                warn!(
                    "{} half-cell: electrode {} dipped into solution of species {}",
                    side, electrode, solution
                );
                Some(SolutionMismatch {
                    side,
                    electrode,
                    solution,
                })
            }
            _ => None,
        };
        self.measurement = None;
        mismatch
    }

    /// An out-of-domain value is rejected and the previous concentration (and
    /// measurement) is kept.
    pub fn set_concentration(&mut self, side: Side, concentration: f64) -> ElectrochemResult<()> {
        self.half_mut(side).set_concentration(concentration)?;
        self.measurement = None;
        Ok(())
    }

    /// exchanges the complete left and right half-cells
    pub fn swap_sides(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
        self.measurement = None;
    }

    /// Switching the level always starts a new problem. On error the session keeps
    /// its previous level and half-cells.
    pub fn set_level<R: RandomSource + ?Sized>(
        &mut self,
        level: ExerciseLevel,
        registry: &mut MetalRegistry,
        rng: &mut R,
    ) -> ElectrochemResult<Option<f64>> {
        let reseeded = Self::reseed_for(level, registry, rng)?;
        self.level = level;
        self.reset();
        Ok(reseeded)
    }

    /// Resets both half-cells (unset, 1.00 mol/L) and, at the unknown-species level,
    /// regenerates the unknown. Returns the new secret E° when a reseed happened.
    /// A registry without an unknown species is not reseeded.
    pub fn new_problem<R: RandomSource + ?Sized>(
        &mut self,
        registry: &mut MetalRegistry,
        rng: &mut R,
    ) -> ElectrochemResult<Option<f64>> {
        let reseeded = Self::reseed_for(self.level, registry, rng)?;
        self.reset();
        Ok(reseeded)
    }

    fn reseed_for<R: RandomSource + ?Sized>(
        level: ExerciseLevel,
        registry: &mut MetalRegistry,
        rng: &mut R,
    ) -> ElectrochemResult<Option<f64>> {
        if !level.reseeds_unknown() {
            return Ok(None);
        }
        if registry.unknown_index().is_none() {
            warn!("Registry has no unknown species, nothing to regenerate at {}", level);
            return Ok(None);
        }
        registry.reseed_unknown(rng).map(Some)
    }

    fn reset(&mut self) {
        self.left = HalfCell::default();
        self.right = HalfCell::default();
        self.measurement = None;
        info!("New problem at {}", self.level);
    }

    /// Reads the voltmeter. Fails when a half-cell is incomplete or when the
    /// reference electrode is wired outside the introductory level.
    pub fn measure(&mut self, registry: &MetalRegistry) -> ElectrochemResult<Measurement> {
        let reading = evaluate_cell(registry, &self.left, &self.right)?;
        if !self.level.allows_reference_electrode()
            && (self.left.electrode == Selection::Selected(REFERENCE_INDEX)
                || self.right.electrode == Selection::Selected(REFERENCE_INDEX))
        {
            return Err(ElectrochemError::ReferenceElectrodeLocked(self.level));
        }
        let measurement = Measurement {
            reading,
            displayed: reading.displayed_voltage(),
        };
        info!(
            "Measured {:.3} V (E left = {:.4} V, E right = {:.4} V)",
            measurement.displayed, reading.left_potential, reading.right_potential
        );
        self.measurement = Some(measurement);
        Ok(measurement)
    }

    /// Verdict of the active level's exercise; `None` for levels without one.
    pub fn check(&self, registry: &MetalRegistry) -> ElectrochemResult<Option<Verdict>> {
        match self.level.exercise() {
            Some(exercise) => exercise.judge(self, registry).map(Some),
            None => Ok(None),
        }
    }

    /// Overview of both half-cells. The E° of the unknown species is masked.
    pub fn summary_table(&self, registry: &MetalRegistry) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Side"),
            Cell::new("Electrode"),
            Cell::new("Solution"),
            Cell::new("c (mol/L)"),
            Cell::new("E° (V)"),
        ]));
        for side in [Side::Left, Side::Right] {
            let half = self.half(side);
            let name = |sel: Selection| match sel.index().and_then(|i| registry.lookup(i).ok()) {
                Some(s) => s.name.clone(),
                None => "-".to_string(),
            };
            let ion = match half.solution.index().and_then(|i| registry.lookup(i).ok()) {
                Some(s) => s.ion_formula.clone(),
                None => "-".to_string(),
            };
            let e0 = match half.electrode.index() {
                Some(i) if registry.is_unknown(i) => "???".to_string(),
                Some(i) => registry
                    .lookup(i)
                    .map(|s| format!("{:.3}", s.standard_potential))
                    .unwrap_or_else(|_| "-".to_string()),
                None => "-".to_string(),
            };
            table.add_row(Row::new(vec![
                Cell::new(&side.to_string()),
                Cell::new(&name(half.electrode)),
                Cell::new(&ion),
                Cell::new(&format!("{:.4}", half.concentration())),
                Cell::new(&e0),
            ]));
        }
        table
    }
}
