//! Deterministic oracle and interpreter fakes for testing.
//!
//! Available behind the `test-utils` feature flag. These stand in for real
//! models and sandboxes so adapter logic can be tested without either.

mod failing_oracle;
mod fixed_label_oracle;
mod scripted_interpreter;
mod scripted_ranked_oracle;

pub use failing_oracle::FailingOracle;
pub use fixed_label_oracle::FixedLabelOracle;
pub use scripted_interpreter::{InterpreterCall, ScriptedInterpreter};
pub use scripted_ranked_oracle::ScriptedRankedOracle;
