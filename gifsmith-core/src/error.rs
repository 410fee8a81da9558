//! Error types shared across the gifsmith pipeline.

use std::io;

use thiserror::Error;

/// Errors produced by the gifsmith core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A user-supplied value could not be parsed (crop rectangle,
    /// start time, frameskip ratio) or fails a basic invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The decoder's diagnostic output did not contain the expected
    /// resolution and frame-rate patterns.
    #[error("Probe parse error: {0}")]
    ProbeParse(String),

    /// An option combination that produces a degenerate sampling rate.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An external tool ran but exited with a failure.
    #[error("External tool error: {0}")]
    ExternalTool(String),

    /// A required external binary is not installed.
    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    /// An external binary exists but could not be started.
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),
}

/// Result type for gifsmith core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
