#![deny(missing_docs)]
//! REPL tool over a sandboxed interpreter.
//!
//! [`SandboxRepl`] takes code from a model, optionally strips Markdown
//! fencing, and forwards it to a [`glossa_core::Interpreter`] in one of two
//! modes: statements (captured output) or a single expression (its value).
//! [`ReplTool`] exposes either mode through the [`glossa_core::Tool`]
//! interface, with blocking and async calls.
//!
//! ```no_run
//! use glossa_repl::{ReplTool, SandboxRepl};
//! # fn interpreter() -> std::sync::Arc<dyn glossa_core::Interpreter> { unimplemented!() }
//!
//! let repl = SandboxRepl::new(interpreter());
//! let tool = ReplTool::statements(repl);
//! ```

pub mod config;
pub mod repl;
pub mod sanitize;
pub mod tool;

pub use config::{ReplConfig, ReplMode};
pub use repl::SandboxRepl;
pub use sanitize::sanitize_input;
pub use tool::{EXPRESSION_TOOL_NAME, ReplTool, STATEMENTS_TOOL_NAME};
