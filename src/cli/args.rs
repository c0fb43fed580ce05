//! Command-line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Install Options:
  --scope {user|project}    Install scope (default: user)
                            user     - Install globally (~/.claude/)
                            project  - Install in current project (.claude/)

  --template {template}     Template type (default: minimal)
                            minimal      - Small projects, learning (1KB)
                            full-stack   - Web applications (8KB)
                            data-science - ML/research projects (6KB)

Examples:
  mind-glaive install --scope user --template full-stack
  mind-glaive install --scope project --template minimal
  mind-glaive uninstall --scope user
  mind-glaive status

After Installation:
  Run these commands in Claude Code:
    /context/status     - Show context health
    /context/optimize   - Run maintenance
    /learn/from-session - Extract patterns";

/// mind-glaive CLI - installs the mind-glaive Claude plugin
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "mind-glaive", arg_required_else_help = true, after_help = AFTER_HELP)]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory containing install.sh and uninstall.sh
    #[arg(long, global = true, env = "MIND_GLAIVE_SCRIPT_DIR", value_name = "DIR")]
    pub script_dir: Option<PathBuf>,

    /// Shell interpreter used to run the scripts
    #[arg(long, global = true, env = "MIND_GLAIVE_INTERPRETER", value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install mind-glaive plugin
    #[command(override_usage = "mind-glaive install [--scope user|project] [--template template-name]")]
    Install {
        /// Install options
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "OPTIONS")]
        options: Vec<String>,
    },

    /// Uninstall mind-glaive plugin
    #[command(override_usage = "mind-glaive uninstall [--scope user|project]")]
    Uninstall {
        /// Uninstall options
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "OPTIONS")]
        options: Vec<String>,
    },

    /// Show installation status
    Status {
        /// Accepted and ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },
}

/// Parse command line arguments, leaving help/error handling to the caller
pub fn parse_args() -> Result<Args, clap::Error> {
    Args::try_parse()
}
