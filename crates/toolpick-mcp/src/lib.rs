//! toolpick-mcp: MCP server configuration and tool identity.
//!
//! Connection lifecycle and tool discovery live elsewhere; this crate only
//! knows what each configured server last reported, and how its tools are
//! named so that ids stay unique across servers.

pub mod bridge;
pub mod config;

use tracing::{debug, warn};

use toolpick_types::McpServerWithTools;

use crate::bridge::{find_tool_id_collisions, server_with_tools};
use crate::config::McpServerConfig;

/// Source of MCP servers and the tools they currently expose.
///
/// Implementations must keep tool uuids unique across all servers and
/// must return fresh data on every call.
pub trait ServerRegistry {
    /// Every configured server, enabled or not, with its tools.
    fn list_servers_with_tools(&self) -> Vec<McpServerWithTools>;
}

impl ServerRegistry for [McpServerConfig] {
    fn list_servers_with_tools(&self) -> Vec<McpServerWithTools> {
        for collision in find_tool_id_collisions(self) {
            warn!(
                id = %collision.id,
                first = %collision.first_server,
                second = %collision.second_server,
                "MCP tool id collides across servers"
            );
        }
        let servers: Vec<McpServerWithTools> = self.iter().map(server_with_tools).collect();
        for server in &servers {
            debug!(
                server = %server.id,
                enabled = server.enabled,
                tool_count = server.tools.len(),
                "Listed MCP server"
            );
        }
        servers
    }
}

impl ServerRegistry for Vec<McpServerWithTools> {
    fn list_servers_with_tools(&self) -> Vec<McpServerWithTools> {
        self.clone()
    }
}
