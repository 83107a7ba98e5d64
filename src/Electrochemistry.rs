/// table of electrode metals, the hydrogen reference and the unknown "Whodatium"
/// # Examples
/// ```
/// use NernstKit::Electrochemistry::metal_registry::MetalRegistry;
/// let registry = MetalRegistry::standard();
/// for species in registry.species() {
///     println!("{} {:.3} V", species.name, species.standard_potential);
/// }
/// registry.print_standard_potentials();
/// ```
pub mod metal_registry;
/// simplified Nernst equation for one electrode
pub mod nernst;
/// half-cells, cell voltage, concentration cells
/// # Examples
/// ```
/// use NernstKit::Electrochemistry::galvanic_cell::{HalfCell, evaluate_cell};
/// use NernstKit::Electrochemistry::metal_registry::MetalRegistry;
/// let registry = MetalRegistry::standard();
/// // Daniell cell: zinc anode on the left, copper cathode on the right
/// let zinc = HalfCell::of_species(7, 1.0).unwrap();
/// let copper = HalfCell::of_species(2, 1.0).unwrap();
/// let reading = evaluate_cell(&registry, &zinc, &copper).unwrap();
/// assert!((reading.voltage - 1.102).abs() < 0.0005);
/// ```
pub mod galvanic_cell;
/// answer checking of the guided levels
pub mod exercises;
/// explicit state of one simulator session
/// # Examples
/// ```
/// use NernstKit::Electrochemistry::cell_session::CellSession;
/// use NernstKit::Electrochemistry::exercises::{ExerciseLevel, Verdict};
/// use NernstKit::Electrochemistry::galvanic_cell::{Selection, Side};
/// use NernstKit::Electrochemistry::metal_registry::MetalRegistry;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut registry = MetalRegistry::standard();
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut session = CellSession::default();
/// session
///     .set_level(ExerciseLevel::StandardPotential, &mut registry, &mut rng)
///     .unwrap();
/// for (side, metal) in [(Side::Left, 7), (Side::Right, 2)] {
///     session.set_electrode(side, Selection::Selected(metal));
///     session.set_solution(side, Selection::Selected(metal));
/// }
/// session.measure(&registry).unwrap();
/// let verdict = session.check(&registry).unwrap().unwrap();
/// assert!(matches!(verdict, Verdict::Correct(_)));
/// ```
pub mod cell_session;
pub mod electrochem_errors;
pub mod random_source;

mod exercises_tests;
