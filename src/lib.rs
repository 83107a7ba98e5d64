#[allow(non_snake_case)]
pub mod Electrochemistry;
pub mod cli;
pub mod settings;
