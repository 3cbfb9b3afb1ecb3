//! CLI support for larch-lang
//!
//! Provides programmatic access to larch CLI functionality for embedding
//! in other tools.

mod convert;
mod run;

pub use convert::node_to_json;
pub use run::{RunOptions, RunOutcome, execute_run};

use std::io;
use std::path::PathBuf;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Input path does not exist or is not a regular file
    InputNotFound(PathBuf),
    /// The input could not be parsed (no further detail is available)
    InvalidFormat,
    /// Output file could not be created or written
    OutputUnwritable(PathBuf, io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::InputNotFound(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            CliError::InvalidFormat => write!(f, "Invalid data format"),
            CliError::OutputUnwritable(path, e) => {
                write!(f, "Could not write to output file {}: {}", path.display(), e)
            }
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No input provided. Pass an input path or pipe a document to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::OutputUnwritable(_, e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
