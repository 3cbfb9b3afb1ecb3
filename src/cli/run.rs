//! Parse a larch document and write out its flattened tree

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::{CliError, node_to_json};
use crate::{Parser, output};

/// Options for a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Input file path; `None` reads the document from stdin
    pub input: Option<PathBuf>,
    /// Output file path; `None` writes to stdout
    pub output: Option<PathBuf>,
    /// Emit the tree as JSON instead of the flat form
    pub json: bool,
}

/// Result of a run
#[derive(Debug)]
pub enum RunOutcome {
    /// Result written to the given file
    Written(PathBuf),
    /// Result written to stdout
    Printed,
}

/// Execute a parse-and-print run
pub fn execute_run(options: &RunOptions) -> Result<RunOutcome, CliError> {
    let mut parser = Parser::new();

    let node = match &options.input {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::InputNotFound(path.clone()));
            }
            parser.parse_file(path).ok_or(CliError::InvalidFormat)?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            parser.parse_str(&buffer).ok_or(CliError::InvalidFormat)?
        }
    };

    let rendered = if options.json {
        let mut text = serde_json::to_string_pretty(&node_to_json(&node))?;
        text.push('\n');
        text
    } else {
        output::to_flat(&node)
    };

    match &options.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .map_err(|e| CliError::OutputUnwritable(path.clone(), e))?;
                }
            }

            fs::write(path, rendered).map_err(|e| CliError::OutputUnwritable(path.clone(), e))?;
            Ok(RunOutcome::Written(path.clone()))
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
            Ok(RunOutcome::Printed)
        }
    }
}
