//! Error types for each protocol.

use thiserror::Error;

/// Malformed or empty caller input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InputError {
    /// The text is empty or contains only whitespace.
    #[error("input text is empty")]
    Empty,

    /// The bytes do not decode as UTF-8.
    #[error("input is not valid utf-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// Sanitization stripped the input down to nothing.
    #[error("input is empty after sanitization")]
    EmptyAfterSanitize,
}

/// Failures raised by an external oracle.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OracleError {
    /// The model could not settle on any language for the text.
    #[error("language could not be determined")]
    Undetermined,

    /// A previous call panicked while holding the oracle lock.
    #[error("oracle lock poisoned")]
    Poisoned,

    /// The model reported a failure.
    #[error("oracle failed: {0}")]
    Failed(String),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// The backend returned no usable result.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The backend returned zero candidates.
    #[error("backend returned no candidates")]
    NoCandidates,

    /// The backend output violated its own shape (length mismatch, empty label).
    #[error("malformed prediction: {0}")]
    MalformedPrediction(String),

    /// A score was NaN, infinite, or outside `[0, 1]`.
    #[error("invalid score: {0}")]
    InvalidScore(f64),

    /// The oracle itself failed.
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),
}

/// The adapter was built or configured incorrectly.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// The threshold is not a finite value in `[0, 1]`.
    #[error("invalid threshold: {0} (expected a finite value in [0, 1])")]
    InvalidThreshold(f64),

    /// The candidate count for ranked requests must be at least one.
    #[error("max_candidates must be at least 1")]
    InvalidCandidateCount,

    /// A model was restricted to fewer languages than it can tell apart.
    #[error("at least {required} languages are required, got {given}")]
    TooFewLanguages {
        /// Minimum the model accepts.
        required: usize,
        /// How many were supplied.
        given: usize,
    },

    /// No interpreter handle was supplied to the REPL tool.
    #[error("no interpreter configured")]
    MissingInterpreter,
}

/// Errors from the public detector operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DetectError {
    /// The caller's text was rejected before reaching the backend.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// The backend produced nothing usable.
    #[error("detection error: {0}")]
    Detection(#[from] DetectionError),
}

/// Failures inside an interpreter handle.
///
/// The REPL tool never surfaces these as errors. They are folded into an
/// error-flagged [`ExecutionOutput`](crate::ExecutionOutput).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The executor could not be reached or started.
    #[error("interpreter unavailable: {0}")]
    Unavailable(String),

    /// The executor replied with something that could not be decoded.
    #[error("interpreter protocol error: {0}")]
    Protocol(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Adapter-level errors from the REPL tool.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReplError {
    /// The code was rejected before reaching the interpreter.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// The tool is misconfigured.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The background worker was cancelled before it produced a result.
    #[error("worker cancelled before completion")]
    WorkerCancelled,
}

/// Errors surfaced through the [`Tool`](crate::Tool) interface.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool arguments did not match the input schema.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The tool is misconfigured.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The tool failed for a reason other than bad input or configuration.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<ReplError> for ToolError {
    fn from(err: ReplError) -> Self {
        match err {
            ReplError::Input(e) => ToolError::InvalidInput(e.to_string()),
            ReplError::Configuration(e) => ToolError::Configuration(e),
            other => ToolError::ExecutionFailed(other.to_string()),
        }
    }
}
