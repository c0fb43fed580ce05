//! Process execution utilities
//!
//! External programs are reached through the [`CommandRunner`] trait so the
//! delegator can be driven by a fake in tests.

use crate::error::{GlaiveError, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// A fully built external command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute
    pub program: String,
    /// Arguments passed verbatim, never through a shell
    pub args: Vec<String>,
    /// Working directory of the child
    pub cwd: Option<PathBuf>,
    /// Extra environment variables for the child
    pub env_vars: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env_vars: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Capability to run external processes
pub trait CommandRunner {
    /// Run a command with inherited stdin/stdout/stderr and wait for it
    fn run_inherited(&self, spec: &CommandSpec) -> Result<()>;

    /// Run a command with all output suppressed; true only on a zero exit
    fn probe(&self, program: &str, args: &[&str]) -> bool;
}

/// Runner backed by `std::process::Command`
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self), fields(command = %spec))]
    fn run_inherited(&self, spec: &CommandSpec) -> Result<()> {
        let cmd_str = spec.to_string();

        if self.debug {
            debug!("Running command: {}", cmd_str);
            if !spec.env_vars.is_empty() {
                debug!("Environment variables: {:?}", spec.env_vars);
            }
        } else {
            info!("+ {}", cmd_str);
        }

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }

        for (key, value) in &spec.env_vars {
            cmd.env(key, value);
        }

        let status = cmd.status().map_err(|e| {
            GlaiveError::process(cmd_str.clone(), None, format!("Failed to execute command: {e}"))
        })?;

        if !status.success() {
            let exit_code = status.code();
            return Err(GlaiveError::process(
                cmd_str,
                exit_code,
                format!("Command failed with exit code: {exit_code:?}"),
            ));
        }

        debug!("Command completed successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    fn probe(&self, program: &str, args: &[&str]) -> bool {
        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let ok = status.success();
                debug!("Probe '{}' succeeded: {}", program, ok);
                ok
            }
            Err(e) => {
                debug!("Failed to probe '{}': {}", program, e);
                false
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}
