//! Error taxonomy for the conversion driver.
//!
//! Each variant captures one failure category: validation problems
//! detected before any process is spawned, environment problems locating
//! the converter, execution problems reported by the converter itself,
//! and a catch-all for anything unexpected underneath.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong while driving the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not name an existing regular file.
    /// Raised before any process is spawned.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// No explicit MIME type was given and the output extension is
    /// missing or unrecognized. Raised before any process is spawned.
    #[error(
        "could not infer target MIME type from output file extension: {}; specify --target-mime",
        .output.display()
    )]
    TargetFormatUnknown { output: PathBuf },

    /// The converter executable could not be located, either on the
    /// PATH search or at the given path.
    #[error(
        "converter not found: {}; ensure unoconv is installed and on your PATH",
        .tool.display()
    )]
    ToolNotFound { tool: PathBuf },

    /// The converter ran and reported failure. Carries the captured
    /// output streams for diagnostics.
    #[error("conversion failed with {}", describe_exit(.code))]
    ToolFailed {
        /// Exit code, or `None` when the process was killed by a signal.
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The converter exceeded the configured time limit and was killed.
    #[error("converter did not finish within {}s and was killed", .limit.as_secs())]
    TimedOut { limit: Duration },

    /// Unexpected I/O failure anywhere in the pipeline.
    #[error("unexpected i/o error during conversion: {0}")]
    Io(#[from] io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
