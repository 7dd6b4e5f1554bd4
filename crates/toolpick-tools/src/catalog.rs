//! The tool catalog: every tool id currently contributed by enabled plugins
//! and enabled MCP servers.
//!
//! A catalog is a snapshot. Resolve a fresh one before every status query or
//! toggle; enabling a plugin or server changes what "all tools" means.

use std::collections::HashSet;

use toolpick_config::ToolpickConfig;
use toolpick_mcp::ServerRegistry;
use toolpick_types::{McpServerWithTools, PluginTools};

use crate::plugins::PluginRegistry;

#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    plugins: Vec<PluginTools>,
    servers: Vec<McpServerWithTools>,
}

impl ToolCatalog {
    /// Build a catalog from already-enumerated plugins and servers.
    ///
    /// `plugins` must only hold enabled plugins. `servers` may include
    /// disabled servers; their tools are left out of the universe.
    pub fn new(plugins: Vec<PluginTools>, servers: Vec<McpServerWithTools>) -> Self {
        Self { plugins, servers }
    }

    /// Read both registries.
    pub fn resolve<P, S>(plugins: &P, servers: &S) -> Self
    where
        P: PluginRegistry + ?Sized,
        S: ServerRegistry + ?Sized,
    {
        let catalog = Self::new(
            plugins.list_enabled_plugins(),
            servers.list_servers_with_tools(),
        );
        tracing::debug!(
            plugins = catalog.plugins.len(),
            servers = catalog.servers.len(),
            tools = catalog.all_tool_ids().len(),
            "Resolved tool catalog"
        );
        catalog
    }

    /// Resolve the catalog described by a configuration document.
    pub fn from_config(config: &ToolpickConfig) -> Self {
        Self::resolve(config, config.mcp.servers.as_slice())
    }

    pub fn plugins(&self) -> &[PluginTools] {
        &self.plugins
    }

    pub fn servers(&self) -> &[McpServerWithTools] {
        &self.servers
    }

    pub fn plugin(&self, name: &str) -> Option<&PluginTools> {
        self.plugins.iter().find(|p| p.name == name)
    }

    pub fn server(&self, id: &str) -> Option<&McpServerWithTools> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// Tool ids of every enabled plugin, multi-tool plugins expanded.
    pub fn plugin_tool_ids(&self) -> Vec<String> {
        dedup(self.plugins.iter().flat_map(|p| p.tool_ids()))
    }

    /// Tool uuids of every enabled server.
    pub fn server_tool_ids(&self) -> Vec<String> {
        dedup(
            self.servers
                .iter()
                .filter(|s| s.enabled)
                .flat_map(|s| s.tool_uuids()),
        )
    }

    /// The universe: plugin ids followed by server ids.
    pub fn all_tool_ids(&self) -> Vec<String> {
        dedup(self.plugin_tool_ids().into_iter().chain(self.server_tool_ids()))
    }

    /// Whether `id` is a tool uuid of any listed server, enabled or not.
    pub fn is_server_tool(&self, id: &str) -> bool {
        self.servers
            .iter()
            .any(|s| s.tools.iter().any(|t| t.uuid == id))
    }

    /// Whether `plugin` owns `id`.
    ///
    /// Prefix ownership of a multi-tool plugin never extends to server tool
    /// uuids, so a server tool named `filesystem_stat` stays a server tool.
    pub fn plugin_owns(&self, plugin: &PluginTools, id: &str) -> bool {
        plugin.tools.iter().any(|t| t.id == id) || (plugin.owns(id) && !self.is_server_tool(id))
    }

    /// Whether `id` belongs to any enabled plugin.
    pub fn is_plugin_tool(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| self.plugin_owns(p, id))
    }

    pub fn is_empty(&self) -> bool {
        self.all_tool_ids().is_empty()
    }
}

fn dedup(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use toolpick_types::{McpServerWithTools, McpToolUnique, PluginKind, PluginTool, PluginTools};

    use super::ToolCatalog;

    pub fn tool(id: &str) -> PluginTool {
        PluginTool {
            id: id.into(),
            description: String::new(),
        }
    }

    pub fn mcp_tool(uuid: &str) -> McpToolUnique {
        McpToolUnique {
            uuid: uuid.into(),
            name: uuid.split('_').next().unwrap_or(uuid).into(),
            description: format!("description of {uuid}"),
        }
    }

    pub fn server(id: &str, uuids: &[&str]) -> McpServerWithTools {
        McpServerWithTools {
            id: id.into(),
            label: None,
            enabled: true,
            tools: uuids.iter().map(|u| mcp_tool(u)).collect(),
        }
    }

    /// `search` (single, `web_search`), `filesystem` (multi, three tools),
    /// server 1 (`tool1_1`, `tool2_1`), server 2 (`tool3_2`, `tool4_2`).
    pub fn catalog() -> ToolCatalog {
        ToolCatalog::new(
            vec![
                PluginTools {
                    name: "search".into(),
                    kind: PluginKind::Single,
                    tools: vec![tool("web_search")],
                },
                PluginTools {
                    name: "filesystem".into(),
                    kind: PluginKind::Multi {
                        prefix: "filesystem_".into(),
                    },
                    tools: vec![
                        tool("filesystem_list"),
                        tool("filesystem_read"),
                        tool("filesystem_write"),
                    ],
                },
            ],
            vec![
                server("1", &["tool1_1", "tool2_1"]),
                server("2", &["tool3_2", "tool4_2"]),
            ],
        )
    }

    pub fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use toolpick_mcp::config::{McpServerConfig, McpToolConfig, McpTransport};

    #[test]
    fn test_all_tool_ids_order() {
        let catalog = catalog();
        assert_eq!(
            catalog.all_tool_ids(),
            ids(&[
                "web_search",
                "filesystem_list",
                "filesystem_read",
                "filesystem_write",
                "tool1_1",
                "tool2_1",
                "tool3_2",
                "tool4_2",
            ])
        );
    }

    #[test]
    fn test_disabled_server_not_in_universe() {
        let mut disabled = server("3", &["tool5_3"]);
        disabled.enabled = false;
        let catalog = ToolCatalog::new(vec![], vec![server("1", &["tool1_1"]), disabled]);
        assert_eq!(catalog.server_tool_ids(), ids(&["tool1_1"]));
        assert!(catalog.server("3").is_some());
    }

    #[test]
    fn test_server_without_tools_contributes_nothing() {
        let catalog = ToolCatalog::new(vec![], vec![server("1", &[])]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.servers().len(), 1);
    }

    #[test]
    fn test_is_plugin_tool() {
        let catalog = catalog();
        assert!(catalog.is_plugin_tool("web_search"));
        assert!(catalog.is_plugin_tool("filesystem_delete"));
        assert!(!catalog.is_plugin_tool("tool1_1"));
    }

    #[test]
    fn test_prefixed_server_tool_is_not_a_plugin_tool() {
        let catalog = ToolCatalog::new(
            catalog().plugins().to_vec(),
            vec![server("1", &["filesystem_stat___0001"])],
        );
        let filesystem = catalog.plugin("filesystem").unwrap();
        assert!(catalog.is_server_tool("filesystem_stat___0001"));
        assert!(!catalog.is_plugin_tool("filesystem_stat___0001"));
        assert!(!catalog.plugin_owns(filesystem, "filesystem_stat___0001"));
        assert!(catalog.plugin_owns(filesystem, "filesystem_legacy"));
    }

    #[test]
    fn test_from_config() {
        let mut config = ToolpickConfig::default();
        config.mcp.servers.push(McpServerConfig {
            id: "srv-0001".into(),
            label: Some("Git".into()),
            enabled: true,
            transport: McpTransport::Stdio {
                command: "git-mcp".into(),
                args: vec![],
                env: Default::default(),
            },
            tools: vec![McpToolConfig {
                name: "log".into(),
                description: "Show commit logs".into(),
            }],
        });
        let catalog = ToolCatalog::from_config(&config);
        assert!(catalog.plugin("search").is_some());
        assert_eq!(catalog.server_tool_ids(), ids(&["log___0001"]));
        assert!(catalog.all_tool_ids().contains(&"search_internet".to_string()));
    }
}
