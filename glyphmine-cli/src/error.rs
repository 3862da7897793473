//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// State directory not found or inaccessible
    StateDirNotFound(String),
    /// No partition directories under the state directory
    NoPartitions(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::StateDirNotFound(path) => write!(f, "State directory not found: {path}"),
            CliError::NoPartitions(path) => {
                write!(f, "No partition directories (ac=*) found under: {path}")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
