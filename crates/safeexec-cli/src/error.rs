//! CLI-specific error types and exit codes.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// At least one name did not resolve. Details were already reported per name.
    #[error("{missing} of {total} names could not be resolved")]
    NotFound { missing: usize, total: usize },

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Encoding JSON output failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: a name was not found (same as `which`)
    /// - 70: internal software error (`EX_SOFTWARE`)
    /// - 74: output error (`EX_IOERR`)
    ///
    /// Argument errors exit with 2 from clap before any lookup happens.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 1,
            Self::Serialization(_) => 70,
            Self::Io(_) => 74,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        // The serializer reports a failed write on the underlying writer as `io`.
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}
