//! Bridge between configured MCP servers and the selection engine's view of them.
//!
//! Server tool names are not unique across servers, so every tool is given a
//! server-scoped id: `{name}___{suffix}` where the suffix is the last four
//! characters of the server id, left-padded with `_`.

use std::collections::{HashMap, HashSet};

use toolpick_types::{McpServerWithTools, McpToolUnique};

use crate::config::McpServerConfig;

const SUFFIX_SEPARATOR: &str = "___";
const SUFFIX_LEN: usize = 4;

/// Build the unique id of tool `name` on server `server_id`.
pub fn unique_tool_name(server_id: &str, name: &str) -> String {
    let chars: Vec<char> = server_id.chars().collect();
    let suffix: String = if chars.len() >= SUFFIX_LEN {
        chars[chars.len() - SUFFIX_LEN..].iter().collect()
    } else {
        let mut padded = "_".repeat(SUFFIX_LEN - chars.len());
        padded.extend(chars);
        padded
    };
    format!("{name}{SUFFIX_SEPARATOR}{suffix}")
}

/// Strip the server suffix from a unique tool id.
///
/// Ids without a suffix are returned unchanged.
pub fn original_tool_name(unique: &str) -> &str {
    let Some((suffix_start, _)) = unique.char_indices().rev().nth(SUFFIX_LEN - 1) else {
        return unique;
    };
    unique[..suffix_start]
        .strip_suffix(SUFFIX_SEPARATOR)
        .unwrap_or(unique)
}

/// Convert a server config and its discovered tools into engine input.
pub fn server_with_tools(config: &McpServerConfig) -> McpServerWithTools {
    McpServerWithTools {
        id: config.id.clone(),
        label: Some(config.display_name()),
        enabled: config.enabled,
        tools: config
            .tools
            .iter()
            .map(|t| McpToolUnique {
                uuid: unique_tool_name(&config.id, &t.name),
                name: t.name.clone(),
                description: t.description.clone(),
            })
            .collect(),
    }
}

/// Two configured servers that would produce the same tool id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolIdCollision {
    /// The colliding unique tool id (or server id, for duplicate servers).
    pub id: String,
    pub first_server: String,
    pub second_server: String,
}

/// Find servers whose ids repeat or whose unique tool ids clash.
///
/// Suffixes only keep the last four characters of a server id, so servers
/// such as `fs-main` and `git-main` collide on any shared tool name.
pub fn find_tool_id_collisions(servers: &[McpServerConfig]) -> Vec<ToolIdCollision> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut server_ids: HashSet<&str> = HashSet::new();
    let mut collisions = Vec::new();
    for server in servers {
        if !server_ids.insert(server.id.as_str()) {
            collisions.push(ToolIdCollision {
                id: server.id.clone(),
                first_server: server.id.clone(),
                second_server: server.id.clone(),
            });
            continue;
        }
        for tool in &server.tools {
            let uuid = unique_tool_name(&server.id, &tool.name);
            match owners.get(&uuid) {
                Some(first) if *first != server.id => collisions.push(ToolIdCollision {
                    id: uuid,
                    first_server: first.to_string(),
                    second_server: server.id.clone(),
                }),
                Some(_) => {}
                None => {
                    owners.insert(uuid, server.id.as_str());
                }
            }
        }
    }
    collisions
}
