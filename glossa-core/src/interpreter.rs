//! The execution protocol: the external sandboxed interpreter a REPL tool wraps.

use crate::error::InterpreterError;
use serde::{Deserialize, Serialize};

/// A long-lived handle to an interpreter, usually running inside a sandbox.
///
/// Both calls block until the interpreter replies. Isolation, timeouts, and
/// resource limits are the implementation's concern; the REPL tool only
/// forwards code and relays results.
///
/// Errors raised *by the executed code* (syntax errors, exceptions, limit
/// violations) are ordinary output: return them as
/// [`ExecutionOutput::error`], not as `Err`. Reserve [`InterpreterError`]
/// for failures of the handle itself.
pub trait Interpreter: Send + Sync {
    /// Run `code` as a sequence of statements and return what it printed.
    fn exec(&self, code: &str) -> Result<ExecutionOutput, InterpreterError>;

    /// Evaluate `code` as a single expression and return its value.
    fn eval(&self, code: &str) -> Result<ExecutionOutput, InterpreterError>;
}

/// What the interpreter produced for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutput {
    /// Captured text for statement mode, the evaluated value for expression mode.
    pub content: serde_json::Value,
    /// Whether the content describes a failure of the executed program.
    pub is_error: bool,
}

impl ExecutionOutput {
    /// Successful textual output.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: serde_json::Value::String(text.into()),
            is_error: false,
        }
    }

    /// Successful structured value.
    pub fn value(value: serde_json::Value) -> Self {
        Self {
            content: value,
            is_error: false,
        }
    }

    /// Error text produced by the program or the executor.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: serde_json::Value::String(message.into()),
            is_error: true,
        }
    }

    /// The content as a string, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        self.content.as_str()
    }

    /// The content rendered for display: strings verbatim, anything else as JSON.
    pub fn render(&self) -> String {
        match &self.content {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl<I: Interpreter + ?Sized> Interpreter for std::sync::Arc<I> {
    fn exec(&self, code: &str) -> Result<ExecutionOutput, InterpreterError> {
        (**self).exec(code)
    }

    fn eval(&self, code: &str) -> Result<ExecutionOutput, InterpreterError> {
        (**self).eval(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_strings_verbatim_and_values_as_json() {
        assert_eq!(ExecutionOutput::text("2\n").render(), "2\n");
        assert_eq!(ExecutionOutput::value(serde_json::json!(2)).render(), "2");
        assert_eq!(
            ExecutionOutput::value(serde_json::json!([1, 2])).render(),
            "[1,2]"
        );
    }

    #[test]
    fn error_output_is_flagged() {
        let out = ExecutionOutput::error("NameError: name 'x' is not defined");
        assert!(out.is_error);
        assert_eq!(out.as_text(), Some("NameError: name 'x' is not defined"));
    }
}
