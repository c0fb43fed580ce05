//! User-facing reporting of parse results and command failures

use crate::error::{GlaiveError, USAGE_HINT};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use colored::Colorize;
use std::process::ExitCode;

/// Print a clap outcome and pick the exit code: help and version succeed
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::DisplayVersion => {
            print!("{}", err.render());
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            let command = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.as_str(),
                _ => "",
            };
            eprintln!("{}", format!("Unknown command: {command}").red());
            eprintln!("{USAGE_HINT}");
            ExitCode::FAILURE
        }
        _ => {
            eprint!("{}", err.render());
            eprintln!("{USAGE_HINT}");
            ExitCode::FAILURE
        }
    }
}

fn root_error(err: &anyhow::Error) -> Option<&GlaiveError> {
    err.chain().find_map(|cause| cause.downcast_ref::<GlaiveError>())
}

/// Message line and optional hint line for a command failure
pub fn failure_lines(err: &anyhow::Error) -> (String, Option<String>) {
    let root = root_error(err);
    let message = match root {
        Some(glaive @ GlaiveError::MissingInterpreter { .. }) => format!("❌ Error: {glaive}"),
        Some(glaive @ GlaiveError::Delegation { .. }) => format!("❌ {glaive}"),
        _ => format!("Error: {err:#}"),
    };
    let hint = root.and_then(GlaiveError::hint).map(str::to_string);
    (message, hint)
}

/// Print a command failure with its hint, if it carries one
pub fn report_error(err: &anyhow::Error) {
    let (message, hint) = failure_lines(err);
    eprintln!("{}", message.red());
    if let Some(hint) = hint {
        eprintln!("{}", hint.yellow());
    }
}
