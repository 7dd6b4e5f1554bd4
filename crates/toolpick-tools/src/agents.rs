//! Per-agent tool selections stored in the configuration document.
//!
//! Every write goes through the canonicalizer against a freshly resolved
//! catalog, so the saved form never depends on how the selection was built.

use toolpick_config::{ConfigError, ToolpickConfig};
use toolpick_types::{AgentConfig, Selection};

use crate::canonical::validate_tool_selection;
use crate::catalog::ToolCatalog;
use crate::target::ToggleTarget;

/// Apply `target` to an agent's selection and store the result.
pub fn toggle_agent_tools(
    config: &mut ToolpickConfig,
    agent: Option<&str>,
    target: &ToggleTarget,
) -> Result<Selection, ConfigError> {
    let catalog = ToolCatalog::from_config(config);
    let entry = config.agent_mut(agent)?;
    let updated = target.apply(&entry.tools, &catalog);
    tracing::info!(agent = %entry.name, selection = ?updated, "Updated agent tools");
    entry.tools = updated.clone();
    Ok(updated)
}

/// Add or replace an agent that came from outside (an import or a sync),
/// canonicalizing its selection first.
///
/// The agent's key is its `name`. Returns the stored selection.
pub fn import_agent(config: &mut ToolpickConfig, mut agent: AgentConfig) -> Selection {
    let catalog = ToolCatalog::from_config(config);
    agent.tools = validate_tool_selection(agent.tools, &catalog);
    let tools = agent.tools.clone();
    if config.agents.insert(agent.name.clone(), agent).is_some() {
        tracing::info!("Replaced existing agent on import");
    }
    tools
}

/// Canonicalize every agent's selection. Useful after plugins or servers
/// were enabled or disabled, since that changes what a full list means.
///
/// Returns the names of agents whose selection changed.
pub fn canonicalize_agents(config: &mut ToolpickConfig) -> Vec<String> {
    let catalog = ToolCatalog::from_config(config);
    let mut changed = Vec::new();
    for (name, agent) in config.agents.iter_mut() {
        let canonical = validate_tool_selection(agent.tools.clone(), &catalog);
        if canonical != agent.tools {
            agent.tools = canonical;
            changed.push(name.clone());
        }
    }
    changed.sort();
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolpick_config::PluginConfig;

    fn agent(name: &str, tools: Selection) -> AgentConfig {
        AgentConfig {
            name: name.into(),
            model: "test/model".into(),
            system_prompt: None,
            tools,
        }
    }

    #[test]
    fn test_toggle_default_agent() {
        let mut config = ToolpickConfig::default();
        let off = ToggleTarget::Plugin {
            name: "search".into(),
        };
        let result = toggle_agent_tools(&mut config, None, &off).unwrap();
        assert!(!result.contains("search_internet"));
        assert_eq!(config.agent(None).unwrap().tools, result);

        let result = toggle_agent_tools(&mut config, None, &off).unwrap();
        assert_eq!(result, Selection::AllTools);
    }

    #[test]
    fn test_toggle_unknown_agent() {
        let mut config = ToolpickConfig::default();
        let err = toggle_agent_tools(&mut config, Some("ghost"), &ToggleTarget::AllPlugins)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAgent(name) if name == "ghost"));
    }

    #[test]
    fn test_import_collapses_full_list() {
        let mut config = ToolpickConfig::default();
        let all = ToolCatalog::from_config(&config).all_tool_ids();
        let stored = import_agent(&mut config, agent("writer", Selection::Tools(all)));
        assert_eq!(stored, Selection::AllTools);
        assert_eq!(config.agent(Some("writer")).unwrap().tools, Selection::AllTools);
    }

    #[test]
    fn test_import_keeps_partial_list() {
        let mut config = ToolpickConfig::default();
        let partial = Selection::from_ids(["search_internet"]);
        let stored = import_agent(&mut config, agent("writer", partial.clone()));
        assert_eq!(stored, partial);
    }

    #[test]
    fn test_canonicalize_after_plugin_disabled() {
        let mut config = ToolpickConfig::default();
        config.plugins.insert(
            "python".into(),
            PluginConfig {
                enabled: false,
                tools: None,
            },
        );
        let without_python = ToolCatalog::from_config(&config).all_tool_ids();
        config
            .agents
            .insert("coder".into(), agent("coder", Selection::Tools(without_python)));

        assert_eq!(canonicalize_agents(&mut config), vec!["coder".to_string()]);
        assert_eq!(config.agent(Some("coder")).unwrap().tools, Selection::AllTools);
        assert!(canonicalize_agents(&mut config).is_empty());
    }
}
