// ============================================================================
// filesamples-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for filesamples-core
//
// This module defines the error taxonomy of the metadata pipeline. Per-file
// errors (probe and fallback failures) are recovered by the collector and
// turned into log lines; per-phase errors (persist failures) are logged by
// the pipeline driver; only enumeration and dependency errors abort a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the filesamples core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external tool could not be started at all.
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Required external dependency not found: {0}")]
    DependencyNotFound(String),

    /// ffprobe exited with a non-zero status. Carries the captured stderr.
    #[error("{stderr}")]
    ProbeFailed { status: Option<i32>, stderr: String },

    /// ffprobe exited cleanly but its output was not valid JSON.
    #[error("Failed to parse ffprobe output: {0}")]
    ProbeParse(#[source] serde_json::Error),

    /// Reading the raw file size during the size-only fallback failed.
    #[error("Failed to read file size for {}: {source}", path.display())]
    FallbackRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the JSON document for a media class failed.
    #[error("Failed to save {}: {reason}", path.display())]
    Persist { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for filesamples-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CoreError::CommandStart` for the given command name.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Builds a `CoreError::ProbeFailed` from a finished process.
pub fn probe_failed_error(status: std::process::ExitStatus, stderr: &[u8]) -> CoreError {
    CoreError::ProbeFailed {
        status: status.code(),
        stderr: String::from_utf8_lossy(stderr).trim_end().to_string(),
    }
}
