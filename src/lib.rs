//! # mind-glaive
//!
//! Command-line installer for the mind-glaive Claude configuration plugin.
//! Installation and removal are delegated to external shell scripts; this
//! crate parses the command line, checks that the shell interpreter is
//! present, reports which scopes are installed, and maps script outcomes to
//! exit codes.
//!
//! ## Example
//!
//! ```no_run
//! use mind_glaive::core::{Scope, ScopeResolver};
//!
//! let resolver = ScopeResolver::from_env();
//! println!("user scope installed: {}", resolver.check_installation(Scope::User));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// `--debug` forces debug output; otherwise `RUST_LOG` is honoured and
/// defaults to warnings only. Logs go to stderr so they never mix with the
/// status and help output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
