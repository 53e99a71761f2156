//! ScriptedInterpreter: records the code it receives and answers from a script.

use crate::error::InterpreterError;
use crate::interpreter::{ExecutionOutput, Interpreter};
use std::collections::HashMap;
use std::sync::Mutex;

/// One call received by a [`ScriptedInterpreter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterCall {
    /// `exec` was called with this code.
    Exec(String),
    /// `eval` was called with this code.
    Eval(String),
}

/// An interpreter that answers from a table instead of running anything.
///
/// Code without a scripted answer yields an error-flagged output, the same
/// way a real interpreter reports a failing program. When built with
/// [`ScriptedInterpreter::unavailable`], every call fails at the handle level.
#[derive(Default)]
pub struct ScriptedInterpreter {
    exec: HashMap<String, ExecutionOutput>,
    eval: HashMap<String, ExecutionOutput>,
    unavailable: Option<String>,
    calls: Mutex<Vec<InterpreterCall>>,
}

impl ScriptedInterpreter {
    /// An interpreter with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter whose handle is broken.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Answer `output` when `exec` receives exactly `code`.
    pub fn on_exec(mut self, code: impl Into<String>, output: ExecutionOutput) -> Self {
        self.exec.insert(code.into(), output);
        self
    }

    /// Answer `output` when `eval` receives exactly `code`.
    pub fn on_eval(mut self, code: impl Into<String>, output: ExecutionOutput) -> Self {
        self.eval.insert(code.into(), output);
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<InterpreterCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn answer(
        &self,
        call: InterpreterCall,
        table: &HashMap<String, ExecutionOutput>,
        code: &str,
    ) -> Result<ExecutionOutput, InterpreterError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if let Some(reason) = &self.unavailable {
            return Err(InterpreterError::Unavailable(reason.clone()));
        }
        Ok(table
            .get(code)
            .cloned()
            .unwrap_or_else(|| ExecutionOutput::error(format!("unscripted code: {code}"))))
    }
}

impl Interpreter for ScriptedInterpreter {
    fn exec(&self, code: &str) -> Result<ExecutionOutput, InterpreterError> {
        self.answer(InterpreterCall::Exec(code.to_owned()), &self.exec, code)
    }

    fn eval(&self, code: &str) -> Result<ExecutionOutput, InterpreterError> {
        self.answer(InterpreterCall::Eval(code.to_owned()), &self.eval, code)
    }
}
