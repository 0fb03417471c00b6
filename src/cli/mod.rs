//! Command-line surface: argument parsing, output formatting and signal wiring

pub mod args;
pub mod output;
pub mod signals;
