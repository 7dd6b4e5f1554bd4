//! Human-readable listing of the tools a selection enables, suitable for a
//! system prompt or a terminal.

use std::fmt::Write;

use toolpick_types::Selection;

use crate::catalog::ToolCatalog;

/// Describe the catalog, limited to `selection` when one is given.
///
/// Plugin tools come first, then MCP tools grouped under their server's
/// display name. Empty sections are left out.
pub fn describe_catalog(catalog: &ToolCatalog, selection: Option<&Selection>) -> String {
    let enabled = |id: &str| selection.is_none_or(|s| s.contains(id));

    let builtin: Vec<(&str, &str)> = catalog
        .plugins()
        .iter()
        .flat_map(|p| p.tools.iter())
        .filter(|t| enabled(t.id.as_str()))
        .map(|t| (t.id.as_str(), t.description.as_str()))
        .collect();

    let servers: Vec<(&str, Vec<(&str, &str)>)> = catalog
        .servers()
        .iter()
        .filter(|s| s.enabled)
        .map(|s| {
            let tools = s
                .tools
                .iter()
                .filter(|t| enabled(t.uuid.as_str()))
                .map(|t| (t.uuid.as_str(), t.description.as_str()))
                .collect::<Vec<_>>();
            (s.display_name(), tools)
        })
        .filter(|(_, tools)| !tools.is_empty())
        .collect();

    if builtin.is_empty() && servers.is_empty() {
        return "No tools are currently available.\n".to_string();
    }

    let mut out = String::from("Available Tools:\n\n");
    if !builtin.is_empty() {
        out.push_str("Built-in Tools:\n");
        for (id, description) in &builtin {
            push_tool(&mut out, id, description);
        }
        out.push('\n');
    }
    if !servers.is_empty() {
        out.push_str("MCP Server Tools:\n");
        for (name, tools) in &servers {
            let _ = writeln!(out, "  {name}:");
            for (id, description) in tools {
                out.push_str("  ");
                push_tool(&mut out, id, description);
            }
        }
    }
    out
}

fn push_tool(out: &mut String, id: &str, description: &str) {
    if description.is_empty() {
        let _ = writeln!(out, "- {id}");
    } else {
        let _ = writeln!(out, "- {id}: {description}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::*;

    #[test]
    fn test_describe_full_catalog() {
        let text = describe_catalog(&catalog(), None);
        assert!(text.starts_with("Available Tools:\n\nBuilt-in Tools:\n- web_search\n"));
        assert!(text.contains("MCP Server Tools:\n  1:\n  - tool1_1: description of tool1_1\n"));
        assert!(text.contains("  2:\n"));
    }

    #[test]
    fn test_describe_respects_selection() {
        let sel = Selection::from_ids(["tool3_2"]);
        let text = describe_catalog(&catalog(), Some(&sel));
        assert!(!text.contains("Built-in Tools"));
        assert!(!text.contains("  1:"));
        assert!(text.contains("- tool3_2"));
        assert!(!text.contains("tool4_2"));
    }

    #[test]
    fn test_describe_nothing_enabled() {
        let text = describe_catalog(&catalog(), Some(&Selection::none()));
        assert_eq!(text, "No tools are currently available.\n");
        assert_eq!(
            describe_catalog(&ToolCatalog::default(), None),
            "No tools are currently available.\n"
        );
    }
}
