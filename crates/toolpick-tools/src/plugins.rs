//! Built-in plugin definitions.
//!
//! Single-tool plugins expose one function named after the tool. Multi-tool
//! plugins expose `prefix + suffix` functions; the suffix list of some of them
//! (e.g. knowledge repositories) comes from configuration.

use once_cell::sync::Lazy;
use tracing::debug;

use toolpick_config::ToolpickConfig;
use toolpick_types::{PluginKind, PluginTool, PluginTools};

/// Source of enabled built-in plugins and the tools they currently expose.
///
/// Implementations must reflect current enablement and re-read the live
/// sub-tool list of multi-tool plugins on every call.
pub trait PluginRegistry {
    fn list_enabled_plugins(&self) -> Vec<PluginTools>;
}

/// All built-in plugins, in menu order.
pub static BUILTIN_PLUGINS: Lazy<Vec<PluginTools>> = Lazy::new(|| {
    vec![
        single(
            "search",
            "search_internet",
            "Search the web for information on a given topic.",
        ),
        single(
            "browse",
            "extract_webpage_content",
            "Download and extract the text content of a web page.",
        ),
        single(
            "image",
            "image_generation",
            "Generate an image from a text prompt.",
        ),
        single("python", "execute_code", "Run a Python program and return its output."),
        multi(
            "filesystem",
            "filesystem_",
            &[
                ("list", "List the entries of a directory."),
                ("read", "Read a text file."),
                ("write", "Write a text file."),
                ("delete", "Delete a file."),
                ("find", "Find files matching a pattern."),
            ],
        ),
        multi("knowledge", "search_knowledge_", &[]),
    ]
});

fn single(name: &str, tool: &str, description: &str) -> PluginTools {
    PluginTools {
        name: name.to_string(),
        kind: PluginKind::Single,
        tools: vec![PluginTool {
            id: tool.to_string(),
            description: description.to_string(),
        }],
    }
}

fn multi(name: &str, prefix: &str, tools: &[(&str, &str)]) -> PluginTools {
    PluginTools {
        name: name.to_string(),
        kind: PluginKind::Multi {
            prefix: prefix.to_string(),
        },
        tools: tools
            .iter()
            .map(|(suffix, description)| PluginTool {
                id: format!("{prefix}{suffix}"),
                description: description.to_string(),
            })
            .collect(),
    }
}

/// Look up a built-in plugin by name.
pub fn builtin_plugin(name: &str) -> Option<&'static PluginTools> {
    BUILTIN_PLUGINS.iter().find(|p| p.name == name)
}

impl PluginRegistry for ToolpickConfig {
    fn list_enabled_plugins(&self) -> Vec<PluginTools> {
        let mut enabled = Vec::new();
        for builtin in BUILTIN_PLUGINS.iter() {
            let settings = self.plugin(&builtin.name);
            if !settings.enabled {
                debug!(plugin = %builtin.name, "Plugin disabled, skipping");
                continue;
            }
            let mut plugin = builtin.clone();
            if let (PluginKind::Multi { prefix }, Some(suffixes)) = (&builtin.kind, &settings.tools)
            {
                plugin.tools = suffixes
                    .iter()
                    .map(|suffix| PluginTool {
                        id: format!("{prefix}{suffix}"),
                        description: String::new(),
                    })
                    .collect();
            }
            enabled.push(plugin);
        }
        enabled
    }
}

impl PluginRegistry for Vec<PluginTools> {
    fn list_enabled_plugins(&self) -> Vec<PluginTools> {
        self.clone()
    }
}
