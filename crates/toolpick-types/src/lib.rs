use serde::{Deserialize, Serialize};

// ──────────────────── Selection Types ────────────────────

/// Which tools an agent or chat session may invoke.
///
/// Persisted as JSON `null` ([`Selection::AllTools`]) or as an array of tool
/// ids ([`Selection::Tools`]). `AllTools` is live: tools that appear in the
/// catalog later are enabled too. An explicit list is frozen and never adopts
/// new tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Selection {
    /// Every tool currently in the catalog.
    #[default]
    AllTools,
    /// Exactly these tool ids. Empty means no tools.
    Tools(Vec<String>),
}

impl Selection {
    /// Selection with no tools enabled.
    pub fn none() -> Self {
        Selection::Tools(Vec::new())
    }

    /// Build an explicit selection, dropping duplicate ids.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !list.contains(&id) {
                list.push(id);
            }
        }
        Selection::Tools(list)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::AllTools)
    }

    /// True for an explicit empty list. `AllTools` is never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Tools(ids) if ids.is_empty())
    }

    /// Whether `id` is enabled. `AllTools` contains every id.
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Selection::AllTools => true,
            Selection::Tools(ids) => ids.iter().any(|t| t == id),
        }
    }

    /// The explicit id list, or `None` for `AllTools`.
    pub fn ids(&self) -> Option<&[String]> {
        match self {
            Selection::AllTools => None,
            Selection::Tools(ids) => Some(ids),
        }
    }

    /// Concrete id list for this selection.
    ///
    /// `AllTools` expands to `all_tool_ids` (the current catalog); an explicit
    /// list is returned as-is.
    pub fn materialize(&self, all_tool_ids: &[String]) -> Vec<String> {
        match self {
            Selection::AllTools => all_tool_ids.to_vec(),
            Selection::Tools(ids) => ids.clone(),
        }
    }
}

impl From<Option<Vec<String>>> for Selection {
    fn from(value: Option<Vec<String>>) -> Self {
        match value {
            None => Selection::AllTools,
            Some(ids) => Selection::from_ids(ids),
        }
    }
}

impl From<Selection> for Option<Vec<String>> {
    fn from(value: Selection) -> Self {
        match value {
            Selection::AllTools => None,
            Selection::Tools(ids) => Some(ids),
        }
    }
}

/// Checkbox state of a group of tools relative to a selection.
///
/// Single-item queries only ever return `All` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    All,
    Some,
    None,
}

// ──────────────────── Plugin Types ────────────────────

/// How a built-in plugin exposes its tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PluginKind {
    /// One tool whose id is the function name.
    Single,
    /// Several tools, all ids start with `prefix`. Toggled as a unit.
    Multi { prefix: String },
}

/// A tool contributed by a built-in plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginTool {
    /// Tool id (function name exposed to the LLM).
    pub id: String,
    #[serde(default)]
    pub description: String,
}

/// An enabled built-in plugin and the tools it currently contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginTools {
    /// Plugin name (e.g. "search", "filesystem").
    pub name: String,
    pub kind: PluginKind,
    /// Live tool list. Exactly one entry for single-tool plugins.
    #[serde(default)]
    pub tools: Vec<PluginTool>,
}

impl PluginTools {
    pub fn is_multi(&self) -> bool {
        matches!(self.kind, PluginKind::Multi { .. })
    }

    pub fn tool_ids(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.id.clone()).collect()
    }

    /// Whether `id` belongs to this plugin.
    ///
    /// Multi-tool plugins own every id carrying their prefix, including
    /// sub-tools the plugin no longer lists. This knows nothing about server
    /// tools; engine code asks the catalog instead.
    pub fn owns(&self, id: &str) -> bool {
        if let PluginKind::Multi { prefix } = &self.kind {
            if id.starts_with(prefix.as_str()) {
                return true;
            }
        }
        self.tools.iter().any(|t| t.id == id)
    }
}

// ──────────────────── MCP Types ────────────────────

/// A tool exposed by an MCP server, with its server-scoped unique id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpToolUnique {
    /// Unique across all servers. This is what selections store.
    pub uuid: String,
    /// Name as reported by the server.
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// An MCP server together with the tools it currently exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerWithTools {
    /// Server identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub tools: Vec<McpToolUnique>,
}

impl McpServerWithTools {
    pub fn tool_uuids(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.uuid.clone()).collect()
    }

    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

// ──────────────────── Agent Types ────────────────────

/// Configuration for a single agent instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name for this agent.
    pub name: String,
    /// Model ID to use (e.g. "anthropic/claude-sonnet-4").
    pub model: String,
    /// Optional system prompt override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Tools this agent may call. Missing or `null` means all tools.
    #[serde(default)]
    pub tools: Selection,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_serde_null() {
        let json = serde_json::to_string(&Selection::AllTools).unwrap();
        assert_eq!(json, "null");
        let parsed: Selection = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Selection::AllTools);
    }

    #[test]
    fn test_selection_serde_list() {
        let sel = Selection::from_ids(["web_search", "tool1_1"]);
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(json, r#"["web_search","tool1_1"]"#);

        let empty: Selection = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_all());
    }

    #[test]
    fn test_selection_from_ids_dedupes() {
        let sel = Selection::from_ids(["a", "b", "a"]);
        assert_eq!(sel.ids().unwrap(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_selection_deserialize_dedupes() {
        let parsed: Selection = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(parsed, Selection::from_ids(["a", "b"]));
    }

    #[test]
    fn test_selection_contains() {
        assert!(Selection::AllTools.contains("anything"));
        assert!(!Selection::none().contains("anything"));
        assert!(Selection::from_ids(["x"]).contains("x"));
    }

    #[test]
    fn test_materialize() {
        let all = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Selection::AllTools.materialize(&all), all);
        assert_eq!(
            Selection::from_ids(["z"]).materialize(&all),
            vec!["z".to_string()]
        );
    }

    #[test]
    fn test_tool_status_serde() {
        let json = serde_json::to_string(&ToolStatus::Some).unwrap();
        assert_eq!(json, "\"some\"");
    }

    #[test]
    fn test_multi_plugin_owns_prefixed_ids() {
        let plugin = PluginTools {
            name: "filesystem".into(),
            kind: PluginKind::Multi {
                prefix: "filesystem_".into(),
            },
            tools: vec![PluginTool {
                id: "filesystem_read".into(),
                description: String::new(),
            }],
        };
        assert!(plugin.is_multi());
        assert!(plugin.owns("filesystem_read"));
        assert!(plugin.owns("filesystem_legacy"));
        assert!(!plugin.owns("web_search"));
    }

    #[test]
    fn test_agent_config_tools_default_all() {
        let json = r#"{"name": "coder", "model": "openai/gpt-4o"}"#;
        let agent: AgentConfig = serde_json::from_str(json).unwrap();
        assert!(agent.tools.is_all());

        let json = r#"{"name": "coder", "model": "openai/gpt-4o", "tools": null}"#;
        let agent: AgentConfig = serde_json::from_str(json).unwrap();
        assert!(agent.tools.is_all());

        let json = r#"{"name": "coder", "model": "openai/gpt-4o", "tools": []}"#;
        let agent: AgentConfig = serde_json::from_str(json).unwrap();
        assert!(agent.tools.is_empty());
    }

    #[test]
    fn test_server_display_name() {
        let server = McpServerWithTools {
            id: "srv-1".into(),
            label: None,
            enabled: true,
            tools: vec![],
        };
        assert_eq!(server.display_name(), "srv-1");
        let json = r#"{"id": "srv-2", "label": "Browser"}"#;
        let parsed: McpServerWithTools = serde_json::from_str(json).unwrap();
        assert!(parsed.enabled);
        assert_eq!(parsed.display_name(), "Browser");
    }
}
