/// interactive terminal menu over one simulator session
pub mod cli_main;
/// learner-facing texts: level instructions, verdict and error messages, input parsing
pub mod exercise_texts;
