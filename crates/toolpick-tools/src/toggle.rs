//! Write-side toggle operations.
//!
//! Each operation takes the current selection and a fresh catalog and returns
//! a new canonical selection. Removing ids from `AllTools` first expands it to
//! the concrete catalog list. Filtered variants take the ids (or plugin names)
//! a search filter currently shows; `None` means no filter is active.
//!
//! None of these fail. Unknown plugins, servers or filter ids match nothing.

use toolpick_types::{McpServerWithTools, McpToolUnique, PluginTools, Selection, ToolStatus};

use crate::canonical::{add_ids, validate_tool_selection, visible_only};
use crate::catalog::ToolCatalog;
use crate::status::{plugin_status, plugins_status, server_tool_uuids, server_tools_status};

/// Expand `selection` and drop every id matching `remove`.
fn remove_where<F>(selection: &Selection, catalog: &ToolCatalog, remove: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut ids = selection.materialize(&catalog.all_tool_ids());
    ids.retain(|id| !remove(id.as_str()));
    ids
}

/// Expand `selection` and append `additions` not already present.
fn with_added(selection: &Selection, catalog: &ToolCatalog, additions: Vec<String>) -> Vec<String> {
    let mut ids = selection.materialize(&catalog.all_tool_ids());
    add_ids(&mut ids, additions);
    ids
}

fn finish(ids: Vec<String>, catalog: &ToolCatalog) -> Selection {
    validate_tool_selection(Selection::Tools(ids), catalog)
}

// ──────────────────── Plugins ────────────────────

/// Flip one plugin on or off.
///
/// Switching off removes every id the plugin owns, even when only some of a
/// multi-tool plugin's tools were selected. Switching on adds all its tools.
pub fn handle_plugin_toggle(
    selection: &Selection,
    catalog: &ToolCatalog,
    plugin_name: &str,
) -> Selection {
    let Some(plugin) = catalog.plugin(plugin_name) else {
        tracing::debug!(plugin = %plugin_name, "Toggle of unknown plugin ignored");
        return validate_tool_selection(selection.clone(), catalog);
    };

    let ids = if plugin_status(selection, catalog, plugin_name) == ToolStatus::All {
        remove_where(selection, catalog, |id| catalog.plugin_owns(plugin, id))
    } else {
        with_added(selection, catalog, plugin.tool_ids())
    };
    finish(ids, catalog)
}

/// Flip the whole plugin group: off when every plugin tool is selected,
/// otherwise on.
pub fn handle_all_plugins_toggle(selection: &Selection, catalog: &ToolCatalog) -> Selection {
    let ids = if plugins_status(selection, catalog) == ToolStatus::All {
        remove_where(selection, catalog, |id| catalog.is_plugin_tool(id))
    } else {
        with_added(selection, catalog, catalog.plugin_tool_ids())
    };
    finish(ids, catalog)
}

fn visible_plugins<'a>(
    catalog: &'a ToolCatalog,
    visible_plugin_names: Option<&[String]>,
) -> Vec<&'a PluginTools> {
    catalog
        .plugins()
        .iter()
        .filter(|p| visible_plugin_names.is_none_or(|names| names.contains(&p.name)))
        .collect()
}

/// Enable every plugin, or only those a filter shows. Server tools are untouched.
pub fn handle_select_all_plugins(
    selection: &Selection,
    catalog: &ToolCatalog,
    visible_plugin_names: Option<&[String]>,
) -> Selection {
    if selection.is_all() {
        return Selection::AllTools;
    }
    let additions = visible_plugins(catalog, visible_plugin_names)
        .into_iter()
        .flat_map(PluginTools::tool_ids)
        .collect();
    finish(with_added(selection, catalog, additions), catalog)
}

/// Disable every plugin, or only those a filter shows. Server tools are untouched.
pub fn handle_unselect_all_plugins(
    selection: &Selection,
    catalog: &ToolCatalog,
    visible_plugin_names: Option<&[String]>,
) -> Selection {
    let targets = visible_plugins(catalog, visible_plugin_names);
    let ids = remove_where(selection, catalog, |id| {
        targets.iter().any(|p| catalog.plugin_owns(p, id))
    });
    finish(ids, catalog)
}

// ──────────────────── MCP servers ────────────────────

/// Flip exactly one server tool.
pub fn handle_server_tool_toggle(
    selection: &Selection,
    catalog: &ToolCatalog,
    server: &McpServerWithTools,
    tool: &McpToolUnique,
) -> Selection {
    tracing::trace!(server = %server.id, tool = %tool.uuid, "Toggling server tool");
    let ids = if selection.contains(&tool.uuid) {
        remove_where(selection, catalog, |id| id == tool.uuid)
    } else {
        with_added(selection, catalog, vec![tool.uuid.clone()])
    };
    finish(ids, catalog)
}

/// Flip all tools of one server: off when all are selected, otherwise on.
pub fn handle_all_server_tools_toggle(
    selection: &Selection,
    catalog: &ToolCatalog,
    server: &McpServerWithTools,
) -> Selection {
    let uuids = server_tool_uuids(catalog.servers(), server);
    let ids = if server_tools_status(catalog.servers(), selection, server) == ToolStatus::All {
        remove_where(selection, catalog, |id| uuids.iter().any(|u| u == id))
    } else {
        with_added(selection, catalog, uuids)
    };
    finish(ids, catalog)
}

/// Enable all tools of one server, or only those a filter shows.
pub fn handle_select_all_server_tools(
    selection: &Selection,
    catalog: &ToolCatalog,
    server: &McpServerWithTools,
    visible_tool_uuids: Option<&[String]>,
) -> Selection {
    if selection.is_all() {
        return Selection::AllTools;
    }
    let additions = visible_only(server_tool_uuids(catalog.servers(), server), visible_tool_uuids);
    finish(with_added(selection, catalog, additions), catalog)
}

/// Disable all tools of one server, or only those a filter shows.
pub fn handle_unselect_all_server_tools(
    selection: &Selection,
    catalog: &ToolCatalog,
    server: &McpServerWithTools,
    visible_tool_uuids: Option<&[String]>,
) -> Selection {
    let targets = visible_only(server_tool_uuids(catalog.servers(), server), visible_tool_uuids);
    let ids = remove_where(selection, catalog, |id| targets.iter().any(|t| t == id));
    finish(ids, catalog)
}

// ──────────────────── Global ────────────────────

/// Enable every tool.
///
/// With a filter, only the visible catalog tools are added and hidden tools
/// keep their state. An empty filter selects nothing and yields `[]`.
pub fn handle_select_all_tools(
    selection: &Selection,
    catalog: &ToolCatalog,
    visible_tool_ids: Option<&[String]>,
) -> Selection {
    let visible = match visible_tool_ids {
        None => return Selection::AllTools,
        Some([]) => return Selection::none(),
        Some(visible) => visible,
    };
    if selection.is_all() {
        return Selection::AllTools;
    }
    let additions = visible_only(catalog.all_tool_ids(), Some(visible));
    finish(with_added(selection, catalog, additions), catalog)
}

/// Disable every tool.
///
/// With a filter, only the visible tools are removed and everything hidden
/// stays enabled. An empty filter removes nothing and yields `AllTools`.
pub fn handle_unselect_all_tools(
    selection: &Selection,
    catalog: &ToolCatalog,
    visible_tool_ids: Option<&[String]>,
) -> Selection {
    let visible = match visible_tool_ids {
        None => return Selection::none(),
        Some([]) => return Selection::AllTools,
        Some(visible) => visible,
    };
    let ids = remove_where(selection, catalog, |id| visible.iter().any(|v| v == id));
    finish(ids, catalog)
}
