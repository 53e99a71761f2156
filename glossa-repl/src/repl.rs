//! The REPL adapter itself.

use crate::config::{ReplConfig, ReplMode};
use crate::sanitize::sanitize_input;
use glossa_core::error::{ConfigurationError, InputError, ReplError};
use glossa_core::interpreter::{ExecutionOutput, Interpreter};
use std::sync::Arc;

/// Forwards code to a sandboxed [`Interpreter`] and relays the result.
///
/// The REPL holds no interpreter state of its own: every call goes straight
/// to the handle, so variables defined in one call are visible in the next
/// exactly when the interpreter keeps them.
///
/// Failures of the executed program, and of the handle, come back as an
/// [`ExecutionOutput`] with `is_error` set. Only adapter problems (no
/// interpreter, nothing left to run) are returned as [`ReplError`].
#[derive(Clone)]
pub struct SandboxRepl {
    interpreter: Option<Arc<dyn Interpreter>>,
    config: ReplConfig,
}

impl SandboxRepl {
    /// A REPL over `interpreter` with default configuration.
    pub fn new(interpreter: Arc<dyn Interpreter>) -> Self {
        Self {
            interpreter: Some(interpreter),
            config: ReplConfig::default(),
        }
    }

    /// A REPL with no interpreter. Every call fails with
    /// [`ConfigurationError::MissingInterpreter`].
    pub fn unconfigured() -> Self {
        Self {
            interpreter: None,
            config: ReplConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Turn input sanitization on or off.
    pub fn sanitize_input(mut self, enabled: bool) -> Self {
        self.config.sanitize_input = enabled;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Run `code` as statements and return its captured output.
    pub fn execute_statements(&self, code: &str) -> Result<ExecutionOutput, ReplError> {
        self.run(ReplMode::Statements, code)
    }

    /// Evaluate `code` as one expression and return its value.
    pub fn evaluate_expression(&self, code: &str) -> Result<ExecutionOutput, ReplError> {
        self.run(ReplMode::Expression, code)
    }

    /// [`execute_statements`](Self::execute_statements) on a blocking worker.
    pub async fn execute_statements_async(
        &self,
        code: &str,
    ) -> Result<ExecutionOutput, ReplError> {
        self.run_async(ReplMode::Statements, code).await
    }

    /// [`evaluate_expression`](Self::evaluate_expression) on a blocking worker.
    pub async fn evaluate_expression_async(
        &self,
        code: &str,
    ) -> Result<ExecutionOutput, ReplError> {
        self.run_async(ReplMode::Expression, code).await
    }

    /// Run `code` in `mode`, blocking the current thread.
    pub fn run(&self, mode: ReplMode, code: &str) -> Result<ExecutionOutput, ReplError> {
        let interpreter = self
            .interpreter
            .as_deref()
            .ok_or(ConfigurationError::MissingInterpreter)?;
        let code = self.prepare(code)?;

        tracing::debug!(
            mode = mode.as_str(),
            sanitized = self.config.sanitize_input,
            bytes = code.len(),
            "forwarding code to interpreter"
        );

        let result = match mode {
            ReplMode::Statements => interpreter.exec(code),
            ReplMode::Expression => interpreter.eval(code),
        };
        let output = result.unwrap_or_else(|err| {
            tracing::warn!(mode = mode.as_str(), error = %err, "interpreter call failed");
            ExecutionOutput::error(err.to_string())
        });
        tracing::debug!(mode = mode.as_str(), is_error = output.is_error, "interpreter replied");
        Ok(output)
    }

    /// Run `code` in `mode` on tokio's blocking pool.
    ///
    /// Must be called from within a tokio runtime. A panic in the
    /// interpreter resumes on the awaiting task.
    pub async fn run_async(
        &self,
        mode: ReplMode,
        code: &str,
    ) -> Result<ExecutionOutput, ReplError> {
        let repl = self.clone();
        let code = code.to_owned();
        match tokio::task::spawn_blocking(move || repl.run(mode, &code)).await {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => Err(ReplError::WorkerCancelled),
        }
    }

    fn prepare<'a>(&self, code: &'a str) -> Result<&'a str, ReplError> {
        if !self.config.sanitize_input {
            return Ok(code);
        }
        let cleaned = sanitize_input(code);
        if cleaned.is_empty() {
            return Err(InputError::EmptyAfterSanitize.into());
        }
        Ok(cleaned)
    }
}

impl std::fmt::Debug for SandboxRepl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SandboxRepl")
            .field("configured", &self.interpreter.is_some())
            .field("config", &self.config)
            .finish()
    }
}
