use super::exercise_texts::{
    error_message, level_instructions, level_title, measurement_message, mismatch_message,
    parse_concentration, verdict_message,
};
use crate::Electrochemistry::cell_session::CellSession;
use crate::Electrochemistry::electrochem_errors::ElectrochemResult;
use crate::Electrochemistry::exercises::ExerciseLevel;
use crate::Electrochemistry::galvanic_cell::{Selection, Side};
use crate::Electrochemistry::metal_registry::MetalRegistry;
use crate::settings::Settings;
use log::info;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// state the menu works on
struct Workbench {
    registry: MetalRegistry,
    session: CellSession,
    rng: StdRng,
}

pub fn run_interactive_menu(settings: &Settings) -> ElectrochemResult<()> {
    let mut registry = settings.build_registry()?;
    let mut rng = settings.build_rng();
    let mut session = CellSession::default();
    // the unknown gets a fresh secret at start-up whatever the level
    if registry.unknown_index().is_some() {
        if let Err(e) = registry.reseed_unknown(&mut rng) {
            feedback(&error_message(&e), false);
        }
    }
    if let Err(e) = session.set_level(settings.start_level()?, &mut registry, &mut rng) {
        feedback(&error_message(&e), false);
    }
    let mut bench = Workbench {
        registry,
        session,
        rng,
    };
    info!("Simulator started at {}", bench.session.level());
    show_level(bench.session.level());

    loop {
        show_main_menu(&bench);
        let choice = get_user_input("Enter your choice: ")?;
        match choice.trim() {
            "1" => choose_electrode(&mut bench, Side::Left)?,
            "2" => choose_electrode(&mut bench, Side::Right)?,
            "3" => choose_solution(&mut bench, Side::Left)?,
            "4" => choose_solution(&mut bench, Side::Right)?,
            "5" => choose_concentration(&mut bench, Side::Left)?,
            "6" => choose_concentration(&mut bench, Side::Right)?,
            "7" => match bench.session.measure(&bench.registry) {
                Ok(m) => feedback(&measurement_message(&m), m.displayed > 0.0),
                Err(e) => feedback(&error_message(&e), false),
            },
            "8" => {
                bench.session.swap_sides();
                feedback("Electrodes swapped!", true);
            }
            "9" => check_answer(&bench),
            "n" => match bench.session.new_problem(&mut bench.registry, &mut bench.rng) {
                Ok(_) => feedback("New problem loaded!", true),
                Err(e) => feedback(&error_message(&e), false),
            },
            "l" => choose_level(&mut bench)?,
            "t" => bench.registry.print_standard_potentials(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

/* colors
Blue (\x1b[34m) - header text
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompts
Green (\x1b[32m) / Red (\x1b[31m) - feedback
Reset (\x1b[0m)
*/
fn show_main_menu(bench: &Workbench) {
    println!(
        "\x1b[34m\n Nernst equation simulator - {}: {}\x1b[0m",
        bench.session.level(),
        level_title(bench.session.level())
    );
    bench.session.summary_table(&bench.registry).printstd();
    if let Some(v) = bench.session.displayed_voltage() {
        println!("\x1b[34m Voltmeter: {:.3} V\x1b[0m", v);
    }
    println!("\x1b[33m1. Left electrode      2. Right electrode\x1b[0m");
    println!("\x1b[33m3. Left solution       4. Right solution\x1b[0m");
    println!("\x1b[33m5. Left concentration  6. Right concentration\x1b[0m");
    println!("\x1b[33m7. Measure voltage     8. Swap electrodes\x1b[0m");
    println!("\x1b[33m9. Check answer        n. New problem\x1b[0m");
    println!("\x1b[33ml. Select level        t. Standard potentials\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
}

fn show_level(level: ExerciseLevel) {
    println!("\x1b[34m\n{}: {}\x1b[0m", level, level_title(level));
    println!("{}", level_instructions(level));
}

fn feedback(message: &str, success: bool) {
    let color = if success { "\x1b[32m" } else { "\x1b[31m" };
    println!("{}{}\x1b[0m", color, message);
}

fn get_user_input(prompt: &str) -> ElectrochemResult<String> {
    print!("\x1b[36m{}\x1b[0m", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

/// empty input clears the selection
fn read_selection(bench: &Workbench) -> ElectrochemResult<Option<Selection>> {
    for (i, s) in bench.registry.species().iter().enumerate() {
        println!("  {:>2}. {} ({})", i, s.name, s.ion_formula);
    }
    let input = get_user_input("Index (empty = none): ")?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(Some(Selection::Unset));
    }
    match input.parse::<usize>() {
        Ok(i) if i < bench.registry.len() => Ok(Some(Selection::Selected(i))),
        _ => {
            feedback("Invalid index.", false);
            Ok(None)
        }
    }
}

fn choose_electrode(bench: &mut Workbench, side: Side) -> ElectrochemResult<()> {
    if let Some(selection) = read_selection(bench)? {
        bench.session.set_electrode(side, selection);
    }
    Ok(())
}

fn choose_solution(bench: &mut Workbench, side: Side) -> ElectrochemResult<()> {
    if let Some(selection) = read_selection(bench)? {
        if let Some(mismatch) = bench.session.set_solution(side, selection) {
            feedback(&mismatch_message(&mismatch, &bench.registry), false);
        }
    }
    Ok(())
}

fn choose_concentration(bench: &mut Workbench, side: Side) -> ElectrochemResult<()> {
    let input = get_user_input("Concentration in mol/L: ")?;
    match parse_concentration(&input) {
        Some(c) => {
            if let Err(e) = bench.session.set_concentration(side, c) {
                feedback(&error_message(&e), false);
            }
        }
        None => feedback("Not a number.", false),
    }
    Ok(())
}

fn choose_level(bench: &mut Workbench) -> ElectrochemResult<()> {
    for level in ExerciseLevel::ALL.iter().filter(|l| l.is_defined()) {
        println!("  {}. {}", level.number(), level_title(*level));
    }
    let input = get_user_input("Level: ")?;
    let level = input
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| ExerciseLevel::try_from(n).ok());
    match level {
        Some(level) => match bench
            .session
            .set_level(level, &mut bench.registry, &mut bench.rng)
        {
            Ok(_) => show_level(level),
            Err(e) => feedback(&error_message(&e), false),
        },
        None => feedback("Invalid level.", false),
    }
    Ok(())
}

fn check_answer(bench: &Workbench) {
    let level = bench.session.level();
    match bench.session.check(&bench.registry) {
        Ok(Some(verdict)) => feedback(&verdict_message(level, &verdict), verdict.is_correct()),
        Ok(None) => println!("There is nothing to check at {}.", level),
        Err(e) => feedback(&error_message(&e), false),
    }
}
