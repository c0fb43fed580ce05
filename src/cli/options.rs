//! Option extraction for the delegated commands
//!
//! `install` and `uninstall` receive their arguments as a raw list. Flags are
//! looked up anywhere in that list and anything unrecognized is ignored.

use crate::{
    core::{
        delegate::{DEFAULT_TEMPLATE, DelegatedAction},
        scope::Scope,
    },
    error::{GlaiveError, Result},
};

pub const SCOPE_FLAG: &str = "--scope";
pub const TEMPLATE_FLAG: &str = "--template";

/// Global flags that only take effect before the command name
pub const GLOBAL_FLAGS: [&str; 3] = ["--debug", "--script-dir", "--interpreter"];

/// Value following the first occurrence of `flag`, or `default` when absent.
///
/// A flag in last position, or followed by another `--` flag, is an error.
pub fn extract_option(args: &[String], flag: &str, default: &str) -> Result<String> {
    let Some(index) = args.iter().position(|arg| arg == flag) else {
        return Ok(default.to_string());
    };

    match args.get(index + 1) {
        Some(value) if !value.starts_with("--") => Ok(value.clone()),
        _ => Err(GlaiveError::malformed_flag(flag)),
    }
}

/// Fail on a global flag that was swallowed into the option list
pub fn reject_global_flags(args: &[String]) -> Result<()> {
    for arg in args {
        let name = arg.split_once('=').map_or(arg.as_str(), |(name, _)| name);
        if GLOBAL_FLAGS.contains(&name) {
            return Err(GlaiveError::invalid_argument(format!(
                "'{name}' must be given before the command, e.g. mind-glaive {name} ... install"
            )));
        }
    }
    Ok(())
}

fn extract_scope(args: &[String]) -> Result<Scope> {
    extract_option(args, SCOPE_FLAG, Scope::default().as_str())?.parse()
}

/// Build the install action from `[--scope user|project] [--template name]`
pub fn install_action(args: &[String]) -> Result<DelegatedAction> {
    reject_global_flags(args)?;
    Ok(DelegatedAction::Install {
        scope: extract_scope(args)?,
        template: extract_option(args, TEMPLATE_FLAG, DEFAULT_TEMPLATE)?,
    })
}

/// Build the uninstall action from `[--scope user|project]`
pub fn uninstall_action(args: &[String]) -> Result<DelegatedAction> {
    reject_global_flags(args)?;
    Ok(DelegatedAction::Uninstall {
        scope: extract_scope(args)?,
    })
}
