//! Environment variable helpers

use std::{env, path::PathBuf};

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Get an environment variable, treating an empty value as unset
    pub fn get_var_non_empty(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }

    /// Resolve the invoking user's home directory from `HOME`, then `USERPROFILE`
    pub fn home_dir() -> Option<PathBuf> {
        home_dir_from(Self::get_var_non_empty)
    }

    /// Current working directory, falling back to `.` when it cannot be read
    pub fn current_dir() -> PathBuf {
        env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Home directory lookup over an arbitrary variable source
pub fn home_dir_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("HOME")
        .or_else(|| lookup("USERPROFILE"))
        .map(PathBuf::from)
}
