use NernstKit::cli::cli_main::run_interactive_menu;
use NernstKit::settings::Settings;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, SimpleLogger, TermLogger, TerminalMode};

/// The logger itself passes every record; `log::max_level` does the filtering, so
/// the level from the settings file can be applied after the file was read.
fn init_logger() {
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        let _ = SimpleLogger::init(LevelFilter::Trace, Config::default());
    }
    log::set_max_level(LevelFilter::Info);
}

pub fn main() {
    init_logger();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Settings::DEFAULT_FILE.to_string());
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Cannot read settings '{}': {}. Using defaults.", path, e);
            Settings::default()
        }
    };
    settings.apply_log_level();

    if let Err(e) = run_interactive_menu(&settings) {
        eprintln!("Simulator stopped: {}", e);
        std::process::exit(1);
    }
}
