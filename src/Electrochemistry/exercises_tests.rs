///////////////////////TESTS////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Electrochemistry::cell_session::CellSession;
    use crate::Electrochemistry::electrochem_errors::ElectrochemError;
    use crate::Electrochemistry::exercises::{
        ConcentrationCellCheck, Exercise, ExerciseCheck, ExerciseLevel, IdentificationCheck,
        Precondition, StandardPotentialCheck, UnknownSpeciesCheck, Verdict,
    };
    use crate::Electrochemistry::galvanic_cell::{Selection, Side};
    use crate::Electrochemistry::metal_registry::{MetalRegistry, WHODATIUM_INDEX};
    use crate::Electrochemistry::random_source::ScriptedSource;
    use approx::assert_relative_eq;

    const SILVER: usize = 1;
    const COPPER: usize = 2;
    const ZINC: usize = 7;

    fn wired(level: ExerciseLevel, left: usize, right: usize) -> CellSession {
        let mut session = CellSession::new(level);
        for (side, index) in [(Side::Left, left), (Side::Right, right)] {
            session.set_electrode(side, Selection::Selected(index));
            session.set_solution(side, Selection::Selected(index));
        }
        session
    }

    /// registry whose unknown species has E° = +0.500 V
    fn registry_with_unknown(e0_draw: f64) -> MetalRegistry {
        let mut registry = MetalRegistry::standard();
        let mut rng = ScriptedSource::new(vec![0.9, e0_draw, 0.0, 0.0]);
        registry.reseed_unknown(&mut rng).unwrap();
        registry
    }

    fn registry_with_copper_at(e0: f64) -> MetalRegistry {
        let mut species = MetalRegistry::standard().species().to_vec();
        species[COPPER].standard_potential = e0;
        MetalRegistry::from_species(species).unwrap()
    }

    ////////////////////////// levels //////////////////////////
    #[test]
    fn test_level_numbers_and_exercises() {
        for n in 0..=6u8 {
            let level = ExerciseLevel::try_from(n).unwrap();
            assert_eq!(level.number(), n);
        }
        assert!(matches!(
            ExerciseLevel::try_from(7),
            Err(ElectrochemError::UnknownLevel(7))
        ));
        assert!(ExerciseLevel::Introduction.exercise().is_none());
        assert!(ExerciseLevel::ActivityCoefficients.exercise().is_none());
        assert!(!ExerciseLevel::ActivitySeries.is_defined());
        assert_eq!(
            ExerciseLevel::Identification.exercise(),
            Some(Exercise::IdentificationCheck(IdentificationCheck))
        );
        assert_eq!(
            ExerciseLevel::UnknownPotential.exercise(),
            Some(Exercise::UnknownSpeciesCheck(UnknownSpeciesCheck {
                tolerance: 0.02
            }))
        );
        assert!(ExerciseLevel::UnknownPotential.reseeds_unknown());
        assert!(!ExerciseLevel::ConcentrationStudy.reseeds_unknown());
    }

    ////////////////////////// identification //////////////////////////
    #[test]
    fn test_identification() {
        let registry = MetalRegistry::standard();
        let mut session = wired(ExerciseLevel::Identification, ZINC, COPPER);
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(Precondition::NoMeasurement))
        );

        session.measure(&registry).unwrap();
        let verdict = session.check(&registry).unwrap().unwrap();
        assert!(verdict.is_correct());
        assert_eq!(verdict.rationale().unwrap().measured, 1.102);

        session.swap_sides();
        session.measure(&registry).unwrap();
        let verdict = IdentificationCheck.judge(&session, &registry).unwrap();
        assert!(matches!(verdict, Verdict::Incorrect(r) if r.measured == -1.102));
    }

    ////////////////////////// standard potential //////////////////////////
    #[test]
    fn test_standard_potential_correct() {
        let registry = MetalRegistry::standard();
        let mut session = wired(ExerciseLevel::StandardPotential, ZINC, COPPER);
        session.measure(&registry).unwrap();
        match session.check(&registry).unwrap() {
            Some(Verdict::Correct(r)) => {
                assert_relative_eq!(r.theoretical.unwrap(), 1.102, epsilon = 1e-9);
                assert_eq!(r.measured, 1.102);
            }
            other => panic!("expected Correct, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_potential_incorrect_and_tolerance() {
        let measured_on = MetalRegistry::standard();
        let mut session = wired(ExerciseLevel::StandardPotential, ZINC, COPPER);
        session.measure(&measured_on).unwrap();
        let check = StandardPotentialCheck::default();

        // 2 mV off: still inside 0.003 V
        let close = registry_with_copper_at(0.341);
        assert!(check.judge(&session, &close).unwrap().is_correct());

        // 11 mV off
        let far = registry_with_copper_at(0.350);
        match check.judge(&session, &far).unwrap() {
            Verdict::Incorrect(r) => {
                assert_relative_eq!(r.theoretical.unwrap(), 1.113, epsilon = 1e-9);
                assert_eq!(r.measured, 1.102);
            }
            other => panic!("expected Incorrect, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_potential_preconditions() {
        let registry = MetalRegistry::standard();
        let mut session = wired(ExerciseLevel::StandardPotential, ZINC, COPPER);
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(Precondition::NoMeasurement))
        );

        session.set_concentration(Side::Right, 0.1).unwrap();
        session.measure(&registry).unwrap();
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(
                Precondition::NonStandardConcentration
            ))
        );
    }

    ////////////////////////// unknown species //////////////////////////
    #[test]
    fn test_unknown_back_solve_left() {
        let registry = registry_with_unknown(0.5);
        let mut session = wired(ExerciseLevel::UnknownPotential, WHODATIUM_INDEX, COPPER);
        let m = session.measure(&registry).unwrap();
        assert_relative_eq!(m.displayed, -0.161, epsilon = 1e-12);
        match session.check(&registry).unwrap() {
            Some(Verdict::Correct(r)) => {
                assert_relative_eq!(r.calculated.unwrap(), 0.5, epsilon = 1e-9);
                assert_relative_eq!(r.theoretical.unwrap(), 0.5);
            }
            other => panic!("expected Correct, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_back_solve_right() {
        let registry = registry_with_unknown(0.5);
        let mut session = wired(ExerciseLevel::UnknownPotential, COPPER, WHODATIUM_INDEX);
        session.measure(&registry).unwrap();
        let verdict = UnknownSpeciesCheck::default()
            .judge(&session, &registry)
            .unwrap();
        assert!(verdict.is_correct());
        assert_relative_eq!(
            verdict.rationale().unwrap().calculated.unwrap(),
            0.5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_unknown_after_reseed_is_incorrect() {
        let registry = registry_with_unknown(0.5);
        let mut session = wired(ExerciseLevel::UnknownPotential, WHODATIUM_INDEX, ZINC);
        session.measure(&registry).unwrap();
        // the secret changed after the reading was taken
        let reseeded = registry_with_unknown(0.45);
        match session.check(&reseeded).unwrap() {
            Some(Verdict::Incorrect(r)) => {
                assert_relative_eq!(r.calculated.unwrap(), 0.5, epsilon = 1e-9);
                assert_relative_eq!(r.theoretical.unwrap(), 0.45);
            }
            other => panic!("expected Incorrect, got {:?}", other),
        }
        // 0.51 is inside the 0.02 V tolerance
        assert!(
            session
                .check(&registry_with_unknown(0.51))
                .unwrap()
                .unwrap()
                .is_correct()
        );
    }

    #[test]
    fn test_unknown_preconditions() {
        let registry = registry_with_unknown(0.5);
        let session = wired(ExerciseLevel::UnknownPotential, WHODATIUM_INDEX, COPPER);
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(Precondition::NoMeasurement))
        );
        let mut session = wired(ExerciseLevel::UnknownPotential, ZINC, COPPER);
        session.measure(&registry).unwrap();
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(
                Precondition::UnknownSpeciesNotWired
            ))
        );
    }

    ////////////////////////// concentration cell //////////////////////////
    #[test]
    fn test_concentration_cell_silver() {
        let registry = MetalRegistry::standard();
        let mut session = wired(ExerciseLevel::ConcentrationStudy, SILVER, SILVER);
        session.set_concentration(Side::Right, 0.1).unwrap();
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(Precondition::NoMeasurement))
        );
        session.measure(&registry).unwrap();
        match session.check(&registry).unwrap() {
            Some(Verdict::Correct(r)) => {
                assert_eq!(r.measured, -0.059);
                assert_relative_eq!(r.theoretical.unwrap(), -0.059, epsilon = 1e-12);
            }
            other => panic!("expected Correct, got {:?}", other),
        }
    }

    #[test]
    fn test_concentration_cell_copper_decades() {
        let registry = MetalRegistry::standard();
        let check = ConcentrationCellCheck::default();
        for (c, expected) in [(0.1, -0.0295), (0.01, -0.059), (0.001, -0.0885)] {
            let mut session = wired(ExerciseLevel::ConcentrationStudy, COPPER, COPPER);
            session.set_concentration(Side::Right, c).unwrap();
            session.measure(&registry).unwrap();
            let verdict = check.judge(&session, &registry).unwrap();
            assert!(verdict.is_correct());
            assert_relative_eq!(
                verdict.rationale().unwrap().theoretical.unwrap(),
                expected,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_concentration_cell_requires_identical_sides() {
        let registry = MetalRegistry::standard();
        let mut session = wired(ExerciseLevel::ConcentrationStudy, ZINC, COPPER);
        session.measure(&registry).unwrap();
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(
                Precondition::NotAConcentrationCell
            ))
        );

        let mut session = wired(ExerciseLevel::ConcentrationStudy, COPPER, COPPER);
        session.set_solution(Side::Right, Selection::Selected(ZINC));
        assert_eq!(
            session.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(
                Precondition::NotAConcentrationCell
            ))
        );

        let empty = CellSession::new(ExerciseLevel::ConcentrationStudy);
        assert_eq!(
            empty.check(&registry).unwrap(),
            Some(Verdict::PreconditionNotMet(
                Precondition::NotAConcentrationCell
            ))
        );
    }
}
