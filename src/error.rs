//! Error types shared by the pacman and pactree clients.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while invoking or interpreting the external package tools.
///
/// Malformed output lines are never errors: the parsers skip them.
#[derive(Error, Debug)]
pub enum PacError {
    /// The binary could not be found on the configured search path.
    #[error("'{name}' command not found.{}", .hint.map_or_else(String::new, |h| format!("\n{h}")))]
    MissingBinary {
        name: String,
        hint: Option<&'static str>,
    },

    /// The command ran but exited unsuccessfully.
    #[error("{program} returned an error ({status}).\n{stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The child process could not be started or waited on.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The location pattern from the configuration is not a valid regex.
    #[error("invalid location pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, PacError>;
