//! Command implementations for the CLI

use crate::{
    cli::{Command, options},
    config::Config,
    core::{DelegatedAction, Delegator, ScopeResolver},
    utils::EnvUtils,
};
use anyhow::Context;
use colored::Colorize;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Install { options: raw } => {
            let action = options::install_action(raw).context("Invalid install options")?;
            execute_delegated_command(config, &action)
        }
        Command::Uninstall { options: raw } => {
            let action = options::uninstall_action(raw).context("Invalid uninstall options")?;
            execute_delegated_command(config, &action)
        }
        Command::Status { extra } => execute_status_command(extra),
    }
}

/// Execute install or uninstall through the external script
#[instrument(skip(config))]
fn execute_delegated_command(config: &Config, action: &DelegatedAction) -> anyhow::Result<()> {
    let delegator = Delegator::new(config.clone(), EnvUtils::current_dir());
    delegator
        .check_preconditions(action)
        .with_context(|| format!("Cannot start {}", action.failure_noun().to_lowercase()))?;

    println!("{}", action.progress_title().blue());
    for (key, value) in action.summary() {
        println!("  {key}: {value}");
    }
    println!();

    delegator.delegate(action).with_context(|| {
        format!(
            "Failed to run {}",
            action.script_path(config).display()
        )
    })?;

    info!("{} finished", action.failure_noun());
    Ok(())
}

/// Execute the status command
#[instrument]
fn execute_status_command(extra: &[String]) -> anyhow::Result<()> {
    if !extra.is_empty() {
        debug!("Ignoring arguments to status: {:?}", extra);
    }

    let resolver = ScopeResolver::from_env();
    info!(
        "Checking installation status from {}",
        resolver.project_root().display()
    );

    writeln!(io::stdout(), "{}", resolver.status().render())
        .context("Failed to write status report")?;
    Ok(())
}
