//! Configuration management for the installer
//!
//! Everything the delegator needs to reach the external scripts is passed in
//! explicitly from here rather than read from globals.

use crate::{cli::Args, error::GlaiveError};
use std::env;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Interpreter configuration
    pub interpreter: InterpreterConfig,
    /// External script configuration
    pub scripts: ScriptConfig,
}

/// Shell interpreter used to run the external scripts
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Program name or path
    pub program: String,
    /// Arguments of the presence check
    pub version_args: Vec<String>,
}

/// Location of the external install/uninstall scripts
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Directory holding the scripts; also the working directory of the child
    pub dir: PathBuf,
    /// Install script file name
    pub install: String,
    /// Uninstall script file name
    pub uninstall: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            interpreter: InterpreterConfig::default(),
            scripts: ScriptConfig::default(),
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: "bash".to_string(),
            version_args: vec!["--version".to_string()],
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            dir: default_script_dir(),
            install: "install.sh".to_string(),
            uninstall: "uninstall.sh".to_string(),
        }
    }
}

/// The scripts ship one level above the directory holding the executable.
fn default_script_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, GlaiveError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        if let Some(interpreter) = &args.interpreter {
            config.interpreter.program = interpreter.clone();
        }
        if let Some(dir) = &args.script_dir {
            config.scripts.dir = dir.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), GlaiveError> {
        if self.interpreter.program.trim().is_empty() {
            return Err(GlaiveError::config("interpreter must not be empty"));
        }

        if self.scripts.install.is_empty() || self.scripts.uninstall.is_empty() {
            return Err(GlaiveError::config("script names must not be empty"));
        }

        Ok(())
    }

    /// Full path of the install script
    pub fn install_script(&self) -> PathBuf {
        self.scripts.dir.join(&self.scripts.install)
    }

    /// Full path of the uninstall script
    pub fn uninstall_script(&self) -> PathBuf {
        self.scripts.dir.join(&self.scripts.uninstall)
    }

    /// Configuration pointing at a specific script directory
    pub fn with_script_dir(dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.scripts.dir = dir.into();
        config
    }
}
