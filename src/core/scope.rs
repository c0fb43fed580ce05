//! Install scopes and the installation state probe
//!
//! A scope is installed when both marker files exist in its `.claude`
//! directory. The state is recomputed on every call.

use crate::{
    error::{GlaiveError, Result},
    utils::env::EnvUtils,
};
use colored::Colorize;
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, warn};

/// Configuration directory name inside a scope root
pub const CONFIG_DIR_NAME: &str = ".claude";

/// Files whose joint presence marks a scope as installed
pub const MARKER_FILES: [&str; 2] = ["CLAUDE.md", "hooks.json"];

/// Install target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// The invoking user's home configuration directory
    #[default]
    User,
    /// The current project's local configuration directory
    Project,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::User, Scope::Project];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
        }
    }

    /// Label used in the status listing
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User Scope (~/.claude/):",
            Self::Project => "Project Scope (./.claude/):",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = GlaiveError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(Self::User),
            "project" => Ok(Self::Project),
            other => Err(GlaiveError::invalid_argument(format!(
                "unknown scope '{other}' (expected 'user' or 'project')"
            ))),
        }
    }
}

/// Maps scopes to their configuration directories
#[derive(Debug, Clone)]
pub struct ScopeResolver {
    home_dir: Option<PathBuf>,
    project_root: PathBuf,
}

impl ScopeResolver {
    pub fn new(home_dir: Option<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            home_dir,
            project_root: project_root.into(),
        }
    }

    /// Resolver for the running process: `HOME`/`USERPROFILE` and the current directory
    pub fn from_env() -> Self {
        Self::new(EnvUtils::home_dir(), EnvUtils::current_dir())
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Configuration directory of a scope, `None` when no home directory is known
    pub fn scope_dir(&self, scope: Scope) -> Option<PathBuf> {
        match scope {
            Scope::User => self.home_dir.as_ref().map(|home| home.join(CONFIG_DIR_NAME)),
            Scope::Project => Some(self.project_root.join(CONFIG_DIR_NAME)),
        }
    }

    /// True only if every marker file exists in the scope directory
    pub fn check_installation(&self, scope: Scope) -> bool {
        let Some(dir) = self.scope_dir(scope) else {
            warn!("Cannot resolve home directory; treating {} scope as not installed", scope);
            return false;
        };

        let installed = MARKER_FILES.iter().all(|name| dir.join(name).exists());
        debug!("Scope {} at {} installed: {}", scope, dir.display(), installed);
        installed
    }

    /// Probe both scopes
    pub fn status(&self) -> InstallationStatus {
        InstallationStatus {
            user: self.check_installation(Scope::User),
            project: self.check_installation(Scope::Project),
        }
    }
}

/// Snapshot of the installation state of both scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallationStatus {
    pub user: bool,
    pub project: bool,
}

impl InstallationStatus {
    pub const fn is_installed(&self, scope: Scope) -> bool {
        match scope {
            Scope::User => self.user,
            Scope::Project => self.project,
        }
    }

    pub const fn any(&self) -> bool {
        self.user || self.project
    }

    /// Human readable status listing
    pub fn render(&self) -> String {
        let mut out = format!("\n{}\n\n", "mind-glaive Installation Status".blue());

        for scope in Scope::ALL {
            let state = if self.is_installed(scope) {
                "✓ Installed".green()
            } else {
                "✗ Not installed".yellow()
            };
            out.push_str(&format!("{:<29}{}\n", scope.label(), state));
        }

        if !self.any() {
            out.push_str(&format!("\n{}\n", "Run: mind-glaive install".yellow()));
        }
        out
    }
}
