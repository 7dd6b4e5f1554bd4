//! A toggle request as a value, so callers (CLI, UI bridges) can carry one
//! around and apply it to any selection.

use serde::{Deserialize, Serialize};

use toolpick_types::{McpServerWithTools, McpToolUnique, Selection};

use crate::canonical::validate_tool_selection;
use crate::catalog::ToolCatalog;
use crate::toggle;

/// What a user clicked.
///
/// `visible` carries the ids (plugin names for the plugin variants) that a
/// menu filter currently shows; `None` means no filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ToggleTarget {
    AllPlugins,
    Plugin {
        name: String,
    },
    ServerTools {
        server: String,
    },
    /// `tool` is the unique id or the server-reported name.
    ServerTool {
        server: String,
        tool: String,
    },
    SelectAll {
        #[serde(default)]
        visible: Option<Vec<String>>,
    },
    UnselectAll {
        #[serde(default)]
        visible: Option<Vec<String>>,
    },
    SelectPlugins {
        #[serde(default)]
        visible: Option<Vec<String>>,
    },
    UnselectPlugins {
        #[serde(default)]
        visible: Option<Vec<String>>,
    },
    SelectServerTools {
        server: String,
        #[serde(default)]
        visible: Option<Vec<String>>,
    },
    UnselectServerTools {
        server: String,
        #[serde(default)]
        visible: Option<Vec<String>>,
    },
}

impl ToggleTarget {
    /// Apply this toggle. Targets naming an unknown server or tool leave the
    /// selection as it was (canonicalized).
    pub fn apply(&self, selection: &Selection, catalog: &ToolCatalog) -> Selection {
        match self {
            ToggleTarget::AllPlugins => toggle::handle_all_plugins_toggle(selection, catalog),
            ToggleTarget::Plugin { name } => toggle::handle_plugin_toggle(selection, catalog, name),
            ToggleTarget::ServerTools { server } => match catalog.server(server) {
                Some(server) => toggle::handle_all_server_tools_toggle(selection, catalog, server),
                None => unchanged(selection, catalog, server),
            },
            ToggleTarget::ServerTool { server, tool } => {
                match catalog.server(server).and_then(|s| Some((s, find_tool(s, tool)?))) {
                    Some((server, tool)) => {
                        toggle::handle_server_tool_toggle(selection, catalog, server, tool)
                    }
                    None => unchanged(selection, catalog, server),
                }
            }
            ToggleTarget::SelectAll { visible } => {
                toggle::handle_select_all_tools(selection, catalog, visible.as_deref())
            }
            ToggleTarget::UnselectAll { visible } => {
                toggle::handle_unselect_all_tools(selection, catalog, visible.as_deref())
            }
            ToggleTarget::SelectPlugins { visible } => {
                toggle::handle_select_all_plugins(selection, catalog, visible.as_deref())
            }
            ToggleTarget::UnselectPlugins { visible } => {
                toggle::handle_unselect_all_plugins(selection, catalog, visible.as_deref())
            }
            ToggleTarget::SelectServerTools { server, visible } => match catalog.server(server) {
                Some(server) => toggle::handle_select_all_server_tools(
                    selection,
                    catalog,
                    server,
                    visible.as_deref(),
                ),
                None => unchanged(selection, catalog, server),
            },
            ToggleTarget::UnselectServerTools { server, visible } => match catalog.server(server) {
                Some(server) => toggle::handle_unselect_all_server_tools(
                    selection,
                    catalog,
                    server,
                    visible.as_deref(),
                ),
                None => unchanged(selection, catalog, server),
            },
        }
    }
}

fn find_tool<'a>(server: &'a McpServerWithTools, tool: &str) -> Option<&'a McpToolUnique> {
    server
        .tools
        .iter()
        .find(|t| t.uuid == tool)
        .or_else(|| server.tools.iter().find(|t| t.name == tool))
}

fn unchanged(selection: &Selection, catalog: &ToolCatalog, server: &str) -> Selection {
    tracing::warn!(server = %server, "Unknown MCP server or tool, selection left unchanged");
    validate_tool_selection(selection.clone(), catalog)
}
