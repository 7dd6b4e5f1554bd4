use serde::{Deserialize, Serialize};

/// Transport configuration for connecting to an MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum McpTransport {
    /// Stdio transport: spawn a child process.
    Stdio {
        command: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        env: std::collections::HashMap<String, String>,
    },
    /// SSE transport: connect to an HTTP SSE endpoint.
    Sse { url: String },
}

/// A tool as last reported by an MCP server's `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolConfig {
    /// Name as reported by the server (not unique across servers).
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Configuration for a single MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpServerConfig {
    /// Stable server identifier. Suffixes of unique tool ids derive from it.
    pub id: String,
    /// Display name for this MCP server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Disabled servers contribute no tools to the catalog.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Transport configuration.
    pub transport: McpTransport,
    /// Tools discovered on the last successful connection.
    #[serde(default)]
    pub tools: Vec<McpToolConfig>,
}

impl McpServerConfig {
    /// Label, falling back to the command or URL, then the id.
    pub fn display_name(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match &self.transport {
            McpTransport::Stdio { command, .. } if !command.is_empty() => command.clone(),
            McpTransport::Sse { url } if !url.is_empty() => url.clone(),
            _ => self.id.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}
