use toolpick_config::ToolpickConfig;
use toolpick_tools::{
    ToolCatalog, describe_catalog, plugin_status, plugins_status, server_tool_status,
    server_tools_status,
};
use toolpick_types::ToolStatus;

fn mark(status: ToolStatus) -> &'static str {
    match status {
        ToolStatus::All => "[x]",
        ToolStatus::Some => "[-]",
        ToolStatus::None => "[ ]",
    }
}

pub fn print_catalog(config: &ToolpickConfig, json: bool) -> anyhow::Result<()> {
    let catalog = ToolCatalog::from_config(config);
    if json {
        let value = serde_json::json!({
            "plugins": catalog.plugins(),
            "servers": catalog.servers(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Plugins:");
    for plugin in catalog.plugins() {
        let kind = if plugin.is_multi() { " (multi)" } else { "" };
        println!("  {}{kind}", plugin.name);
        for tool in &plugin.tools {
            println!("    {}", tool.id);
        }
    }
    println!("MCP servers:");
    for server in catalog.servers() {
        let state = if server.enabled { "" } else { " (disabled)" };
        println!("  {} [{}]{state}", server.display_name(), server.id);
        for tool in &server.tools {
            println!("    {}", tool.uuid);
        }
    }
    Ok(())
}

pub fn print_status(config: &ToolpickConfig, agent: Option<&str>) -> anyhow::Result<()> {
    let agent = config.agent(agent)?;
    let catalog = ToolCatalog::from_config(config);
    let selection = &agent.tools;

    println!("Agent: {}", agent.name);
    println!("{} Plugins", mark(plugins_status(selection, &catalog)));
    for plugin in catalog.plugins() {
        println!(
            "    {} {}",
            mark(plugin_status(selection, &catalog, &plugin.name)),
            plugin.name
        );
    }
    for server in catalog.servers().iter().filter(|s| s.enabled) {
        println!(
            "{} {}",
            mark(server_tools_status(catalog.servers(), selection, server)),
            server.display_name()
        );
        for tool in &server.tools {
            let status = server_tool_status(catalog.servers(), selection, server, tool);
            println!("    {} {}", mark(status), tool.name);
        }
    }
    Ok(())
}

pub fn print_description(
    config: &ToolpickConfig,
    agent: Option<&str>,
    all: bool,
) -> anyhow::Result<()> {
    let catalog = ToolCatalog::from_config(config);
    let text = if all {
        describe_catalog(&catalog, None)
    } else {
        describe_catalog(&catalog, Some(&config.agent(agent)?.tools))
    };
    print!("{text}");
    Ok(())
}
