//! toolpick-tools: tool selection resolution.
//!
//! Provides:
//! - The tool catalog built from enabled plugins and MCP servers
//! - Canonicalization of selections (`null` = all tools)
//! - Status queries for plugin and server checkboxes
//! - Toggle handlers, including filtered select/unselect all
//! - Agent-level helpers that store selections in the config document

pub mod agents;
pub mod canonical;
pub mod catalog;
pub mod describe;
pub mod plugins;
pub mod status;
pub mod target;
pub mod toggle;

pub use canonical::{resolve_enabled_tools, validate_tool_selection};
pub use catalog::ToolCatalog;
pub use describe::describe_catalog;
pub use plugins::{BUILTIN_PLUGINS, PluginRegistry, builtin_plugin};
pub use status::{plugin_status, plugins_status, server_tool_status, server_tools_status};
pub use target::ToggleTarget;
