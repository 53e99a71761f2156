//! [`Tool`] wrappers so a framework can hand the REPL to a model.

use crate::config::ReplMode;
use crate::repl::SandboxRepl;
use async_trait::async_trait;
use glossa_core::error::ToolError;
use glossa_core::interpreter::ExecutionOutput;
use glossa_core::tool::{Tool, ToolDefinition, ToolOutput};
use serde::Deserialize;
use serde_json::{Value, json};

/// Name of the statement-mode tool.
pub const STATEMENTS_TOOL_NAME: &str = "python_repl";

/// Name of the expression-mode tool.
pub const EXPRESSION_TOOL_NAME: &str = "python_repl_ast";

const STATEMENTS_DESCRIPTION: &str = "A Python shell running in a sandbox. Use this to execute \
python commands. Input should be valid python statements. If you want to see the output of a \
value, print it out with `print(...)`.";

const EXPRESSION_DESCRIPTION: &str = "A Python shell running in a sandbox. Use this to evaluate \
a single python expression. Input should be a valid python expression; its value is returned.";

/// Tool arguments. A bare JSON string is accepted as the query.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReplInput {
    Args { query: String },
    Raw(String),
}

impl ReplInput {
    fn into_query(self) -> String {
        match self {
            ReplInput::Args { query } | ReplInput::Raw(query) => query,
        }
    }
}

/// A [`SandboxRepl`] bound to one [`ReplMode`], exposed as a [`Tool`].
#[derive(Debug, Clone)]
pub struct ReplTool {
    repl: SandboxRepl,
    mode: ReplMode,
}

impl ReplTool {
    /// Statement mode, named [`STATEMENTS_TOOL_NAME`].
    pub fn statements(repl: SandboxRepl) -> Self {
        Self {
            repl,
            mode: ReplMode::Statements,
        }
    }

    /// Expression mode, named [`EXPRESSION_TOOL_NAME`].
    pub fn expression(repl: SandboxRepl) -> Self {
        Self {
            repl,
            mode: ReplMode::Expression,
        }
    }

    /// The mode this tool runs code in.
    pub fn mode(&self) -> ReplMode {
        self.mode
    }

    /// The wrapped REPL.
    pub fn repl(&self) -> &SandboxRepl {
        &self.repl
    }

    fn query(input: Value) -> Result<String, ToolError> {
        serde_json::from_value::<ReplInput>(input)
            .map(ReplInput::into_query)
            .map_err(|e| ToolError::InvalidInput(format!("expected {{\"query\": string}}: {e}")))
    }
}

fn to_tool_output(out: ExecutionOutput) -> ToolOutput {
    ToolOutput {
        content: out.content,
        is_error: out.is_error,
    }
}

#[async_trait]
impl Tool for ReplTool {
    fn definition(&self) -> ToolDefinition {
        let (name, description, query) = match self.mode {
            ReplMode::Statements => (
                STATEMENTS_TOOL_NAME,
                STATEMENTS_DESCRIPTION,
                "Python statements to execute",
            ),
            ReplMode::Expression => (
                EXPRESSION_TOOL_NAME,
                EXPRESSION_DESCRIPTION,
                "A Python expression to evaluate",
            ),
        };
        ToolDefinition {
            name: name.into(),
            description: description.into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": query }
                },
                "required": ["query"]
            }),
        }
    }

    fn call_blocking(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let query = Self::query(input)?;
        Ok(to_tool_output(self.repl.run(self.mode, &query)?))
    }

    async fn call(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let query = Self::query(input)?;
        Ok(to_tool_output(self.repl.run_async(self.mode, &query).await?))
    }
}
