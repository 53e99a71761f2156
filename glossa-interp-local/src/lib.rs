#![deny(missing_docs)]
//! Local implementation of glossa-core's Interpreter trait.
//!
//! No isolation, no resource limits, no persistent state. Every call spawns
//! a fresh Python process on the host. Use it for development and tests;
//! production deployments put a real sandbox behind the
//! [`Interpreter`] trait instead.

use glossa_core::error::InterpreterError;
use glossa_core::interpreter::{ExecutionOutput, Interpreter};
use std::process::{Command, Output, Stdio};

/// Evaluates `sys.argv[1]` as one expression and prints the value as JSON,
/// falling back to its `repr` for values JSON cannot express.
const EVAL_DRIVER: &str = r#"import json, sys
value = eval(compile(sys.argv[1], "<expr>", "eval"))
try:
    print(json.dumps(value))
except (TypeError, ValueError):
    print(json.dumps(repr(value)))
"#;

/// Runs code with a Python executable found on the host.
#[derive(Debug, Clone)]
pub struct LocalPython {
    program: String,
}

impl LocalPython {
    /// Use `python3` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: "python3".to_owned(),
        }
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this interpreter spawns.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether the executable can be started at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn spawn(&self, args: &[&str]) -> Result<Output, InterpreterError> {
        tracing::debug!(backend = "local_python", program = %self.program, "spawning interpreter");
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| InterpreterError::Unavailable(format!("{}: {e}", self.program)))
    }
}

impl Default for LocalPython {
    fn default() -> Self {
        Self::new()
    }
}

fn failure(output: &Output) -> ExecutionOutput {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).into_owned()
    } else {
        stderr.into_owned()
    };
    ExecutionOutput::error(message)
}

impl Interpreter for LocalPython {
    fn exec(&self, code: &str) -> Result<ExecutionOutput, InterpreterError> {
        let output = self.spawn(&["-c", code])?;
        if !output.status.success() {
            return Ok(failure(&output));
        }
        Ok(ExecutionOutput::text(String::from_utf8_lossy(&output.stdout)))
    }

    fn eval(&self, code: &str) -> Result<ExecutionOutput, InterpreterError> {
        let output = self.spawn(&["-c", EVAL_DRIVER, code])?;
        if !output.status.success() {
            return Ok(failure(&output));
        }
        let value = serde_json::from_slice(&output.stdout)
            .map_err(|e| InterpreterError::Protocol(format!("eval driver output: {e}")))?;
        Ok(ExecutionOutput::value(value))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn output(code: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn failure_prefers_stderr() {
        let out = failure(&output(1, "partial", "NameError: x"));
        assert_eq!(out, ExecutionOutput::error("NameError: x"));
    }

    #[test]
    fn failure_falls_back_to_stdout() {
        let out = failure(&output(1, "partial", "  \n"));
        assert_eq!(out, ExecutionOutput::error("partial"));
    }

    #[test]
    fn missing_program_is_unavailable() {
        let python = LocalPython::with_program("glossa-no-such-python");
        assert!(!python.is_available());
        assert!(matches!(
            python.exec("print(1)"),
            Err(InterpreterError::Unavailable(_))
        ));
        assert!(matches!(
            python.eval("1"),
            Err(InterpreterError::Unavailable(_))
        ));
    }

    #[test]
    fn defaults_to_python3() {
        assert_eq!(LocalPython::default().program(), "python3");
    }
}
