#![deny(missing_docs)]
//! # glossa: umbrella crate
//!
//! A single import surface for the glossa workspace. Re-exports the
//! protocol crate and its implementations behind feature flags, plus a
//! `prelude` for the common path.

#[cfg(feature = "core")]
pub use glossa_core;
#[cfg(feature = "detect")]
pub use glossa_detect_ranked;
#[cfg(feature = "detect")]
pub use glossa_detect_single;
#[cfg(feature = "interp-local")]
pub use glossa_interp_local;
#[cfg(feature = "lingua")]
pub use glossa_oracle_lingua;
#[cfg(feature = "repl")]
pub use glossa_repl;

/// Common imports for wiring detectors and REPL tools.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use glossa_core::{
        Candidate, Confidence, DetectError, DetectorKind, Exclusive, ExecutionOutput, Interpreter,
        LabelOracle, LanguageCode, LanguageDetector, RankedOracle, Tool, ToolError, ToolOutput,
    };

    #[cfg(feature = "detect")]
    pub use glossa_detect_ranked::{RankedConfig, RankedDetector, Threshold};

    #[cfg(feature = "detect")]
    pub use glossa_detect_single::SingleLabelDetector;

    #[cfg(feature = "lingua")]
    pub use glossa_oracle_lingua::{LinguaOracle, Scoring};

    #[cfg(feature = "repl")]
    pub use glossa_repl::{ReplConfig, ReplMode, ReplTool, SandboxRepl};

    #[cfg(feature = "interp-local")]
    pub use glossa_interp_local::LocalPython;
}
