//! Error types for the mining engine

use thiserror::Error;

/// Errors surfaced by record sources and the mining coordinator
///
/// Failures are confined to the partition they occur in: the worker boundary
/// converts them into failed partition reports instead of propagating them
/// across sibling partitions.
#[derive(Error, Debug)]
pub enum MineError {
    /// Input file for a partition does not exist
    #[error("missing input for partition {partition}: {path}")]
    MissingInput {
        /// The partition identifier (e.g. "ac=012")
        partition: String,
        /// The path that was expected to exist
        path: String,
    },

    /// I/O error while reading partition records
    #[error("I/O error: {0}")]
    Io(String),

    /// A record line could not be parsed
    #[error("malformed record in {path} at line {line}: {reason}")]
    MalformedRecord {
        /// The file the record came from
        path: String,
        /// 1-based line number of the offending record
        line: usize,
        /// Parser diagnostic
        reason: String,
    },

    /// Invalid configuration or thread-pool setup
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for MineError {
    fn from(err: std::io::Error) -> Self {
        MineError::Io(err.to_string())
    }
}

/// Result type for mining operations
pub type Result<T> = std::result::Result<T, MineError>;
