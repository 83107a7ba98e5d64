//! Everything the learner reads. The calculation core only returns numbers and
//! verdicts; this module turns them into sentences.

use crate::Electrochemistry::cell_session::{Measurement, SolutionMismatch};
use crate::Electrochemistry::electrochem_errors::ElectrochemError;
use crate::Electrochemistry::exercises::{ExerciseLevel, Precondition, Verdict};
use crate::Electrochemistry::galvanic_cell::Polarity;
use crate::Electrochemistry::metal_registry::MetalRegistry;
use crate::Electrochemistry::nernst::{MAX_CONCENTRATION, MIN_CONCENTRATION};

pub fn level_title(level: ExerciseLevel) -> &'static str {
    match level {
        ExerciseLevel::Introduction => "Introduction - all features available",
        ExerciseLevel::Identification => "Identification - find anode and cathode",
        ExerciseLevel::StandardPotential => "Standard cell potential",
        ExerciseLevel::UnknownPotential => "Determine the standard potential of Whodatium",
        ExerciseLevel::ConcentrationStudy => "Influence of concentration (systematic)",
        ExerciseLevel::ActivityCoefficients => "Activity coefficients (not available)",
        ExerciseLevel::ActivitySeries => "Activity series (not available)",
    }
}

pub fn level_instructions(level: ExerciseLevel) -> &'static str {
    match level {
        ExerciseLevel::Introduction => {
            "Pick two different electrodes with their matching solutions and measure the cell voltage.\n\
             Change the concentrations and watch the voltage. The larger the difference of the\n\
             standard potentials, the higher the voltage."
        }
        ExerciseLevel::Identification => {
            "Build a cell, measure it and decide which electrode is the anode and which the cathode.\n\
             Hint: with a positive voltage the left electrode is the anode (lower potential)."
        }
        ExerciseLevel::StandardPotential => {
            "Pick two different electrodes, set both concentrations to 1.00 M and measure.\n\
             At standard conditions E°(cell) = E°(cathode) - E°(anode),\n\
             e.g. Cu/Zn: 0.339 - (-0.763) = 1.102 V."
        }
        ExerciseLevel::UnknownPotential => {
            "Whodatium (Wd) is a fictional element. Combine it with known electrodes at 1.00 M,\n\
             measure, and derive E°(Wd) from E(cell) = E(cathode) - E(anode)."
        }
        ExerciseLevel::ConcentrationStudy => {
            "Part A: keep one half-cell of a Cu/Zn cell at 1.00 M and dilute the other\n\
             1.00 M -> 0.10 M -> 0.01 M -> 0.001 M.\n\
             Part B: repeat with a concentration cell of two silver half-cells (Ag/Ag+).\n\
             Compare every voltage with the concentration ratio."
        }
        ExerciseLevel::ActivityCoefficients | ExerciseLevel::ActivitySeries => {
            "This level has no exercise yet."
        }
    }
}

pub fn measurement_message(measurement: &Measurement) -> String {
    match measurement.reading.polarity {
        Polarity::RightCathode => format!("Positive voltage: {:.3} V", measurement.displayed),
        Polarity::Reversed => format!(
            "Negative voltage: {:.3} V (swap the electrodes?)",
            measurement.displayed
        ),
        Polarity::Balanced => format!("No voltage: {:.3} V", measurement.displayed),
    }
}

pub fn mismatch_message(mismatch: &SolutionMismatch, registry: &MetalRegistry) -> String {
    let name = |i: usize| {
        registry
            .lookup(i)
            .map(|s| s.name.clone())
            .unwrap_or_else(|_| format!("#{}", i))
    };
    format!(
        "Warning: {} electrode ({}) and solution ({}) do not match! Expect odd results.",
        mismatch.side,
        name(mismatch.electrode),
        name(mismatch.solution)
    )
}

fn precondition_message(level: ExerciseLevel, precondition: Precondition) -> String {
    match (level, precondition) {
        (ExerciseLevel::StandardPotential, _) => {
            "Set both concentrations to 1.00 M and take a measurement!".to_string()
        }
        (ExerciseLevel::UnknownPotential, _) => {
            "Build a cell with Whodatium and measure the voltage!".to_string()
        }
        (_, Precondition::NotAConcentrationCell) => {
            "For a concentration cell both electrodes AND both solutions must be identical!"
                .to_string()
        }
        (_, Precondition::NoMeasurement) => "Take a measurement first!".to_string(),
        (_, other) => format!("Cannot check yet: {}", other),
    }
}

pub fn verdict_message(level: ExerciseLevel, verdict: &Verdict) -> String {
    let (rationale, correct) = match verdict {
        Verdict::PreconditionNotMet(p) => return precondition_message(level, *p),
        Verdict::Correct(r) => (r, true),
        Verdict::Incorrect(r) => (r, false),
    };
    let theoretical = rationale.theoretical.unwrap_or(f64::NAN);
    match (level, correct) {
        (ExerciseLevel::Identification, true) => {
            "Correct! The left electrode is the anode, the right one the cathode.".to_string()
        }
        (ExerciseLevel::Identification, false) => {
            "The voltage is negative. Think about what that means!".to_string()
        }
        (ExerciseLevel::StandardPotential, true) => {
            format!("Very good! Measured {:.3} V = E°(cell)", rationale.measured)
        }
        (ExerciseLevel::StandardPotential, false) => format!(
            "E° should be {:.3} V. Your measurement: {:.3} V",
            theoretical, rationale.measured
        ),
        (ExerciseLevel::UnknownPotential, true) => format!(
            "Very good! E°(Wd²⁺/Wd) ≈ {:.3} V (exact: {:.3} V)",
            rationale.calculated.unwrap_or(f64::NAN),
            theoretical
        ),
        (ExerciseLevel::UnknownPotential, false) => format!(
            "Your result: {:.3} V. The correct E°(Wd) is {:.3} V.",
            rationale.calculated.unwrap_or(f64::NAN),
            theoretical
        ),
        (_, true) => format!(
            "Correct! Measured {:.3} V, (0.059 V / z) · lg(c_right / c_left) = {:.4} V",
            rationale.measured, theoretical
        ),
        (_, false) => format!(
            "Measured {:.3} V but (0.059 V / z) · lg(c_right / c_left) = {:.4} V",
            rationale.measured, theoretical
        ),
    }
}

pub fn error_message(error: &ElectrochemError) -> String {
    match error {
        ElectrochemError::MissingConfiguration(_, part) => {
            format!("Please choose both {}s!", part)
        }
        ElectrochemError::OutOfDomain(_) => format!(
            "Concentration must lie between {} and {} M!",
            MIN_CONCENTRATION, MAX_CONCENTRATION
        ),
        ElectrochemError::ReferenceElectrodeLocked(_) => {
            "The hydrogen electrode is only available at level 0!".to_string()
        }
        other => other.to_string(),
    }
}

/// Accepts a decimal comma ("0,5") as well as a decimal point.
pub fn parse_concentration(input: &str) -> Option<f64> {
    input.trim().replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Electrochemistry::exercises::Rationale;
    use crate::Electrochemistry::galvanic_cell::Side;

    #[test]
    fn test_parse_concentration() {
        assert_eq!(parse_concentration("0,5"), Some(0.5));
        assert_eq!(parse_concentration(" 1.00 \n"), Some(1.0));
        assert_eq!(parse_concentration("abc"), None);
    }

    #[test]
    fn test_verdict_messages() {
        let r = Rationale {
            measured: 1.102,
            theoretical: Some(1.113),
            calculated: None,
        };
        assert_eq!(
            verdict_message(ExerciseLevel::StandardPotential, &Verdict::Incorrect(r)),
            "E° should be 1.113 V. Your measurement: 1.102 V"
        );
        let r = Rationale {
            measured: -0.161,
            theoretical: Some(0.5),
            calculated: Some(0.5),
        };
        assert!(
            verdict_message(ExerciseLevel::UnknownPotential, &Verdict::Correct(r))
                .contains("0.500 V")
        );
        assert_eq!(
            verdict_message(
                ExerciseLevel::ConcentrationStudy,
                &Verdict::PreconditionNotMet(Precondition::NotAConcentrationCell)
            ),
            "For a concentration cell both electrodes AND both solutions must be identical!"
        );
    }

    #[test]
    fn test_error_and_mismatch_messages() {
        let registry = MetalRegistry::standard();
        let mismatch = SolutionMismatch {
            side: Side::Right,
            electrode: 2,
            solution: 7,
        };
        let text = mismatch_message(&mismatch, &registry);
        assert!(text.contains("Copper") && text.contains("Zinc"));
        assert_eq!(
            error_message(&ElectrochemError::ReferenceElectrodeLocked(
                ExerciseLevel::Identification
            )),
            "The hydrogen electrode is only available at level 0!"
        );
        for level in ExerciseLevel::ALL {
            assert!(!level_title(level).is_empty());
            assert!(!level_instructions(level).is_empty());
        }
    }
}
