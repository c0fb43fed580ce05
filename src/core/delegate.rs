//! Delegated install/uninstall actions
//!
//! The real work is done by external scripts. This module checks that the
//! interpreter is reachable, builds the script command line and maps the
//! outcome to [`GlaiveError`].

use crate::{
    config::Config,
    core::scope::Scope,
    error::{GlaiveError, Result},
    utils::process::{CommandRunner, CommandSpec, ProcessRunner},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Template used when `--template` is not given
pub const DEFAULT_TEMPLATE: &str = "minimal";

/// Templates the bundled install script ships with
pub const KNOWN_TEMPLATES: [&str; 3] = ["minimal", "full-stack", "data-science"];

/// Environment variable telling the scripts where the user invoked the CLI
pub const PROJECT_DIR_ENV: &str = "MIND_GLAIVE_PROJECT_DIR";

/// An operation performed by an external script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegatedAction {
    Install { scope: Scope, template: String },
    Uninstall { scope: Scope },
}

impl DelegatedAction {
    pub const fn scope(&self) -> Scope {
        match self {
            Self::Install { scope, .. } | Self::Uninstall { scope } => *scope,
        }
    }

    /// Arguments handed to the script after its path
    pub fn script_args(&self) -> Vec<String> {
        match self {
            Self::Install { scope, template } => vec![
                "--scope".to_string(),
                scope.to_string(),
                "--template".to_string(),
                template.clone(),
            ],
            Self::Uninstall { scope } => vec!["--scope".to_string(), scope.to_string()],
        }
    }

    pub fn script_path(&self, config: &Config) -> PathBuf {
        match self {
            Self::Install { .. } => config.install_script(),
            Self::Uninstall { .. } => config.uninstall_script(),
        }
    }

    /// Progress line printed before the script starts
    pub const fn progress_title(&self) -> &'static str {
        match self {
            Self::Install { .. } => "Installing mind-glaive...",
            Self::Uninstall { .. } => "Uninstalling mind-glaive...",
        }
    }

    /// Noun used in the failure message
    pub const fn failure_noun(&self) -> &'static str {
        match self {
            Self::Install { .. } => "Installation",
            Self::Uninstall { .. } => "Uninstallation",
        }
    }

    /// `key: value` lines describing the action
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Install { scope, template } => {
                vec![("Scope", scope.to_string()), ("Template", template.clone())]
            }
            Self::Uninstall { scope } => vec![("Scope", scope.to_string())],
        }
    }
}

/// Remediation shown when the interpreter is missing
pub const fn remediation_hint() -> &'static str {
    if cfg!(windows) {
        "Windows users: Install WSL2 or Git Bash"
    } else {
        "Install bash with your system package manager"
    }
}

/// Runs delegated actions through a [`CommandRunner`]
#[derive(Debug)]
pub struct Delegator<R = ProcessRunner> {
    config: Config,
    project_dir: PathBuf,
    runner: R,
}

impl Delegator<ProcessRunner> {
    /// Create a delegator backed by real processes
    #[must_use]
    pub fn new(config: Config, project_dir: impl Into<PathBuf>) -> Self {
        let runner = ProcessRunner::new(config.debug);
        Self::with_runner(config, project_dir, runner)
    }
}

impl<R: CommandRunner> Delegator<R> {
    pub fn with_runner(config: Config, project_dir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            config,
            project_dir: project_dir.into(),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Whether the interpreter answers its version query
    #[instrument(skip(self))]
    pub fn interpreter_available(&self) -> bool {
        let interpreter = &self.config.interpreter;
        let args: Vec<&str> = interpreter.version_args.iter().map(String::as_str).collect();
        self.runner.probe(&interpreter.program, &args)
    }

    /// Gate run before anything is delegated
    #[instrument(skip(self))]
    pub fn check_preconditions(&self, action: &DelegatedAction) -> Result<()> {
        if !self.interpreter_available() {
            return Err(GlaiveError::missing_interpreter(
                interpreter_display_name(&self.config.interpreter.program),
                remediation_hint(),
            ));
        }

        let script = action.script_path(&self.config);
        if !script.is_file() {
            return Err(GlaiveError::config(format!(
                "script not found: {}",
                script.display()
            )));
        }

        if let DelegatedAction::Install { template, .. } = action {
            if !KNOWN_TEMPLATES.contains(&template.as_str()) {
                warn!(
                    "Unknown template '{}'; passing it to the install script as is",
                    template
                );
            }
        }

        Ok(())
    }

    /// Command line that runs the script for `action`
    pub fn command_for(&self, action: &DelegatedAction) -> CommandSpec {
        let script = action.script_path(&self.config);
        CommandSpec::new(self.config.interpreter.program.clone())
            .arg(script.to_string_lossy())
            .args(action.script_args())
            .current_dir(self.config.scripts.dir.clone())
            .env(PROJECT_DIR_ENV, self.project_dir.to_string_lossy())
    }

    /// Run the script; any failure becomes a delegation error
    #[instrument(skip(self))]
    pub fn delegate(&self, action: &DelegatedAction) -> Result<()> {
        let spec = self.command_for(action);
        debug!("Delegating {:?} to: {}", action, spec);

        self.runner
            .run_inherited(&spec)
            .map_err(|e| GlaiveError::delegation(action.failure_noun(), e))?;

        info!("{} completed", action.failure_noun());
        Ok(())
    }

    /// Preconditions then delegation
    pub fn run(&self, action: &DelegatedAction) -> Result<()> {
        self.check_preconditions(action)?;
        self.delegate(action)
    }
}

/// `bash` for `/usr/bin/bash`, keeping custom names as given
fn interpreter_display_name(program: &str) -> String {
    let name = Path::new(program)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string());

    if name == "bash" {
        "Bash".to_string()
    } else {
        name
    }
}
