//! Error types for the plugin installer
//!
//! Every failure is terminal at the top level; `main` maps these to exit codes.

use thiserror::Error;

/// Hint printed after argument errors
pub const USAGE_HINT: &str = "Run 'mind-glaive help' for usage information";

/// Main error type for the installer
#[derive(Error, Debug)]
pub enum GlaiveError {
    /// The shell interpreter needed by the external scripts is not reachable
    #[error("{interpreter} is required but not found")]
    MissingInterpreter { interpreter: String, hint: String },

    /// The external install/uninstall script failed or could not be started
    #[error("{action} failed")]
    Delegation {
        action: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<Box<GlaiveError>>,
    },

    /// Unknown command or an unacceptable option value
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A recognized flag given without a value
    #[error("Missing value for {flag}")]
    MalformedFlag { flag: String },

    /// Process execution errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl GlaiveError {
    /// Create a new missing interpreter error
    pub fn missing_interpreter(interpreter: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingInterpreter {
            interpreter: interpreter.into(),
            hint: hint.into(),
        }
    }

    /// Create a new delegation error wrapping the runner failure
    pub fn delegation(action: impl Into<String>, source: GlaiveError) -> Self {
        let exit_code = match &source {
            Self::Process { exit_code, .. } => *exit_code,
            _ => None,
        };
        Self::Delegation {
            action: action.into(),
            exit_code,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new malformed flag error
    pub fn malformed_flag(flag: impl Into<String>) -> Self {
        Self::MalformedFlag { flag: flag.into() }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Follow-up line shown to the user after the error message, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingInterpreter { hint, .. } => Some(hint),
            Self::InvalidArgument { .. } | Self::MalformedFlag { .. } => Some(USAGE_HINT),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GlaiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegation_keeps_exit_code() {
        let err = GlaiveError::delegation(
            "Installation",
            GlaiveError::process("bash install.sh", Some(3), "exited with 3"),
        );
        assert_eq!(err.to_string(), "Installation failed");
        match err {
            GlaiveError::Delegation { exit_code, .. } => assert_eq!(exit_code, Some(3)),
            other => panic!("Expected Delegation, got {other:?}"),
        }
    }

    #[test]
    fn test_hints() {
        let err = GlaiveError::missing_interpreter("bash", "Install bash");
        assert_eq!(err.to_string(), "bash is required but not found");
        assert_eq!(err.hint(), Some("Install bash"));

        assert_eq!(GlaiveError::malformed_flag("--scope").hint(), Some(USAGE_HINT));
        assert_eq!(GlaiveError::config("bad").hint(), None);
    }
}
