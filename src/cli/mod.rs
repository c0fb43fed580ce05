//! Command-line interface module
//!
//! Provides argument parsing, command execution and error reporting.

pub mod args;
pub mod commands;
pub mod options;
pub mod output;

pub use args::{Args, Command, parse_args};
pub use commands::execute_command;
pub use output::{report_error, report_parse_error};
