//! The tool protocol: how an orchestration framework invokes a tool.

use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Metadata a framework shows to the model that picks tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description of what the tool does and how to call it.
    pub description: String,
    /// JSON Schema for the tool's input object.
    pub input_schema: serde_json::Value,
}

/// Result of one tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The tool's result.
    pub content: serde_json::Value,
    /// Whether the result describes a failure the caller should see as such.
    #[serde(default)]
    pub is_error: bool,
}

impl ToolOutput {
    /// The content rendered for display: strings verbatim, anything else as JSON.
    pub fn render(&self) -> String {
        match &self.content {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A tool callable with JSON arguments.
///
/// `call` must not block the async runtime; tools wrapping blocking work
/// hand it to a worker. `call_blocking` is the same operation for callers
/// outside any runtime, and must produce the same result.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description, and input schema.
    fn definition(&self) -> ToolDefinition;

    /// Invoke the tool from a blocking context.
    fn call_blocking(&self, input: serde_json::Value) -> Result<ToolOutput, ToolError>;

    /// Invoke the tool from an async context.
    async fn call(&self, input: serde_json::Value) -> Result<ToolOutput, ToolError>;
}
