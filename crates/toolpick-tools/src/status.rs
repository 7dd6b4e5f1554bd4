//! Read-side status queries that drive the tool menu checkboxes.
//!
//! All functions are pure. Group queries answer [`ToolStatus::All`],
//! [`ToolStatus::Some`] or [`ToolStatus::None`]; single-item queries only
//! `All` or `None`.

use std::collections::HashSet;

use toolpick_types::{McpServerWithTools, McpToolUnique, PluginKind, Selection, ToolStatus};

use crate::catalog::ToolCatalog;

/// Aggregate status of `group` within `selection`.
fn group_status(selection: &Selection, group: &[String]) -> ToolStatus {
    let ids = match selection {
        Selection::AllTools => return ToolStatus::All,
        Selection::Tools(ids) if ids.is_empty() => return ToolStatus::None,
        Selection::Tools(ids) => ids,
    };
    let selected: HashSet<&str> = ids.iter().map(String::as_str).collect();
    let present = group.iter().filter(|id| selected.contains(id.as_str())).count();
    if present == 0 {
        ToolStatus::None
    } else if present == group.len() {
        ToolStatus::All
    } else {
        ToolStatus::Some
    }
}

/// Status of every enabled plugin tool taken together.
pub fn plugins_status(selection: &Selection, catalog: &ToolCatalog) -> ToolStatus {
    group_status(selection, &catalog.plugin_tool_ids())
}

/// Status of one plugin.
///
/// A multi-tool plugin reads as `All` as soon as any of its prefixed tools is
/// selected, even if the others are not. Unknown plugins read as `None`
/// unless the selection is `AllTools`.
pub fn plugin_status(
    selection: &Selection,
    catalog: &ToolCatalog,
    plugin_name: &str,
) -> ToolStatus {
    let ids = match selection {
        Selection::AllTools => return ToolStatus::All,
        Selection::Tools(ids) => ids,
    };
    let Some(plugin) = catalog.plugin(plugin_name) else {
        return ToolStatus::None;
    };
    let enabled = match &plugin.kind {
        PluginKind::Single => plugin.tools.iter().any(|t| ids.contains(&t.id)),
        PluginKind::Multi { .. } => ids.iter().any(|id| catalog.plugin_owns(plugin, id)),
    };
    if enabled {
        ToolStatus::All
    } else {
        ToolStatus::None
    }
}

/// Current tool uuids of `server`, preferring the live entry in `servers`.
pub(crate) fn server_tool_uuids(
    servers: &[McpServerWithTools],
    server: &McpServerWithTools,
) -> Vec<String> {
    servers
        .iter()
        .find(|s| s.id == server.id)
        .unwrap_or(server)
        .tool_uuids()
}

/// Status of all tools of one MCP server.
///
/// A server that exposes no tools always reads as `None`.
pub fn server_tools_status(
    servers: &[McpServerWithTools],
    selection: &Selection,
    server: &McpServerWithTools,
) -> ToolStatus {
    let uuids = server_tool_uuids(servers, server);
    if uuids.is_empty() {
        return ToolStatus::None;
    }
    group_status(selection, &uuids)
}

/// Status of a single MCP server tool.
///
/// `tool` is matched by name against the live entry of `server` in `servers`,
/// so a stale copy of the tool still reads the id the catalog uses now.
pub fn server_tool_status(
    servers: &[McpServerWithTools],
    selection: &Selection,
    server: &McpServerWithTools,
    tool: &McpToolUnique,
) -> ToolStatus {
    let live = servers.iter().find(|s| s.id == server.id).unwrap_or(server);
    let uuid = live
        .tools
        .iter()
        .find(|t| t.name == tool.name)
        .map_or(tool.uuid.as_str(), |t| t.uuid.as_str());
    if selection.contains(uuid) {
        ToolStatus::All
    } else {
        ToolStatus::None
    }
}
