//! REPL configuration.

use serde::{Deserialize, Serialize};

/// Options for a [`SandboxRepl`](crate::SandboxRepl).
///
/// ```
/// use glossa_repl::ReplConfig;
///
/// let config: ReplConfig = serde_json::from_str("{}").unwrap();
/// assert!(config.sanitize_input);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Strip Markdown fences and a leading `python` tag before execution.
    pub sanitize_input: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            sanitize_input: true,
        }
    }
}

/// How code is handed to the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplMode {
    /// Run a block of statements and capture what it prints.
    Statements,
    /// Evaluate one expression and return its value.
    Expression,
}

impl ReplMode {
    /// Stable name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            ReplMode::Statements => "statements",
            ReplMode::Expression => "expression",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_defaults_on() {
        assert!(ReplConfig::default().sanitize_input);
    }

    #[test]
    fn explicit_false_is_kept() {
        let config: ReplConfig = serde_json::from_str(r#"{"sanitize_input": false}"#).unwrap();
        assert!(!config.sanitize_input);
    }

    #[test]
    fn mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReplMode::Expression).unwrap(),
            r#""expression""#
        );
        let mode: ReplMode = serde_json::from_str(r#""statements""#).unwrap();
        assert_eq!(mode, ReplMode::Statements);
    }
}
