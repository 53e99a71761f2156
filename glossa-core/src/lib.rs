//! # glossa-core: Protocol traits for pluggable detectors and REPL tools
//!
//! This crate defines the boundaries that the rest of the workspace
//! implements. Nothing here does any inference or runs any code; backends
//! live in their own crates and callers depend only on these traits.
//!
//! ## The Protocols
//!
//! | Protocol | Trait | What it does |
//! |----------|-------|-------------|
//! | Detection | [`LanguageDetector`] | Most probable language, or ranked candidates |
//! | Oracle | [`LabelOracle`], [`RankedOracle`] | The external model a detector wraps |
//! | Execution | [`Interpreter`] | The external sandbox a REPL tool wraps |
//! | Tool | [`Tool`] | How an orchestration framework invokes a tool |
//!
//! ## Two detection tiers
//!
//! Every detector answers [`LanguageDetector::detect_single_language`] and
//! [`LanguageDetector::detect_many_languages`]. Backends that only produce a
//! best guess report [`DetectorKind::SingleLabel`] and attach
//! [`Confidence::Unscored`]; ranked backends report [`DetectorKind::Ranked`]
//! and attach [`Confidence::Score`]. The difference is visible in the types,
//! so callers never have to probe for a score that may not exist.
//!
//! ## Thread safety
//!
//! Oracles are only required to be `Send`. A detector is `Sync` (and so
//! usable behind `&dyn LanguageDetector` from many threads) only when its
//! oracle is. Wrap a model that cannot take concurrent calls in
//! [`Exclusive`], which serializes every call behind a mutex.

#![deny(missing_docs)]

pub mod detector;
pub mod error;
pub mod interpreter;
pub mod language;
pub mod oracle;
pub mod tool;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use detector::{DetectorKind, LanguageDetector, rank_candidates, validate_text};
pub use error::{
    ConfigurationError, DetectError, DetectionError, InputError, InterpreterError, OracleError,
    ReplError, ToolError,
};
pub use interpreter::{ExecutionOutput, Interpreter};
pub use language::{Candidate, Confidence, LanguageCode};
pub use oracle::{Exclusive, LabelOracle, Prediction, RankedOracle};
pub use tool::{Tool, ToolDefinition, ToolOutput};
