use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use toolpick_mcp::bridge::find_tool_id_collisions;
use toolpick_mcp::config::McpServerConfig;
use toolpick_types::{AgentConfig, Selection};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    NoDirFound,
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),
    #[error("MCP tool id {id} is produced by both server {first} and server {second}")]
    ToolIdCollision {
        id: String,
        first: String,
        second: String,
    },
}

/// Per-plugin settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Disabled plugins contribute no tools to the catalog.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sub-tool suffixes of a multi-tool plugin, replacing its built-in list
    /// (e.g. one entry per knowledge repository). Ignored for single-tool plugins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tools: None,
        }
    }
}

/// MCP section of the configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub servers: Vec<McpServerConfig>,
}

/// Top-level toolpick configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolpickConfig {
    /// Plugin settings keyed by plugin name. Missing plugins use defaults.
    #[serde(default)]
    pub plugins: HashMap<String, PluginConfig>,
    /// Configured MCP servers.
    #[serde(default)]
    pub mcp: McpConfig,
    /// Named agent configurations.
    #[serde(default)]
    pub agents: HashMap<String, AgentConfig>,
    /// Default agent name.
    #[serde(default = "default_agent_name")]
    pub default_agent: String,
}

fn default_true() -> bool {
    true
}

fn default_agent_name() -> String {
    "default".to_string()
}

impl Default for ToolpickConfig {
    fn default() -> Self {
        let mut agents = HashMap::new();
        agents.insert(
            "default".to_string(),
            AgentConfig {
                name: "default".to_string(),
                model: "anthropic/claude-sonnet-4".to_string(),
                system_prompt: Some("You are a helpful assistant.".to_string()),
                tools: Selection::AllTools,
            },
        );

        Self {
            plugins: HashMap::new(),
            mcp: McpConfig::default(),
            agents,
            default_agent: default_agent_name(),
        }
    }
}

impl ToolpickConfig {
    /// Settings for `name`, or the defaults when the plugin is not configured.
    pub fn plugin(&self, name: &str) -> PluginConfig {
        self.plugins.get(name).cloned().unwrap_or_default()
    }

    /// Look up an agent, falling back to the default agent when `name` is `None`.
    pub fn agent(&self, name: Option<&str>) -> Result<&AgentConfig, ConfigError> {
        let name = name.unwrap_or(&self.default_agent);
        self.agents
            .get(name)
            .ok_or_else(|| ConfigError::UnknownAgent(name.to_string()))
    }

    /// Reject documents the selection engine cannot work with: duplicate
    /// server ids, or servers whose unique tool ids clash.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match find_tool_id_collisions(&self.mcp.servers).into_iter().next() {
            Some(c) => Err(ConfigError::ToolIdCollision {
                id: c.id,
                first: c.first_server,
                second: c.second_server,
            }),
            None => Ok(()),
        }
    }

    pub fn agent_mut(&mut self, name: Option<&str>) -> Result<&mut AgentConfig, ConfigError> {
        let name = name.unwrap_or(&self.default_agent).to_string();
        self.agents
            .get_mut(&name)
            .ok_or(ConfigError::UnknownAgent(name))
    }
}

/// Resolve the toolpick config directory (~/.toolpick/).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join(".toolpick"))
        .ok_or(ConfigError::NoDirFound)
}

/// Resolve the config file path (~/.toolpick/config.json5).
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.json5"))
}

/// Load configuration from the default path, falling back to defaults.
pub fn load_config() -> Result<ToolpickConfig, ConfigError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let path = config_file_path()?;
    load_config_from(&path)
}

/// Load configuration from a specific path, falling back to defaults if not found.
pub fn load_config_from(path: &Path) -> Result<ToolpickConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {}, using defaults", path.display());
        return Ok(ToolpickConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: ToolpickConfig = json5::from_str(&content)?;
    config.validate()?;
    tracing::debug!(
        path = %path.display(),
        agents = config.agents.len(),
        servers = config.mcp.servers.len(),
        "Loaded config"
    );
    Ok(config)
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = config_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Save configuration to the default path.
pub fn save_config(config: &ToolpickConfig) -> Result<(), ConfigError> {
    let dir = ensure_config_dir()?;
    save_config_to(config, &dir.join("config.json5"))
}

/// Save configuration to a specific path as pretty JSON (a json5 subset).
pub fn save_config_to(config: &ToolpickConfig, path: &Path) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "Saved config");
    Ok(())
}
