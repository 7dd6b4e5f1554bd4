mod status;
mod toggle;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use toolpick_config::ToolpickConfig;

#[derive(Parser)]
#[command(name = "toolpick", about = "Manage which tools an agent may call")]
struct Cli {
    /// Config file to use instead of ~/.toolpick/config.json5
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every plugin and MCP server tool currently available
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the checkbox state of an agent's tool menu
    Status {
        /// Agent name (defaults to the configured default agent)
        #[arg(short, long)]
        agent: Option<String>,
    },
    /// Toggle tools for an agent and save the result
    Toggle {
        /// Agent name (defaults to the configured default agent)
        #[arg(short, long)]
        agent: Option<String>,

        #[command(subcommand)]
        target: toggle::TargetArgs,
    },
    /// Describe the tools an agent has enabled
    Describe {
        /// Agent name (defaults to the configured default agent)
        #[arg(short, long)]
        agent: Option<String>,

        /// Describe the whole catalog instead of the agent's selection
        #[arg(long)]
        all: bool,
    },
    /// Import an agent definition from a JSON file
    Import {
        /// Path to the agent JSON
        path: PathBuf,
    },
    /// Re-canonicalize every agent's selection against the current catalog
    Canonicalize,
}

fn load(path: Option<&PathBuf>) -> anyhow::Result<ToolpickConfig> {
    let config = match path {
        Some(path) => toolpick_config::load_config_from(path)?,
        None => toolpick_config::load_config()?,
    };
    tracing::debug!(
        path = ?path,
        agents = config.agents.len(),
        servers = config.mcp.servers.len(),
        "Config loaded"
    );
    Ok(config)
}

fn save(config: &ToolpickConfig, path: Option<&PathBuf>) -> anyhow::Result<()> {
    match path {
        Some(path) => toolpick_config::save_config_to(config, path)?,
        None => toolpick_config::save_config(config)?,
    }
    tracing::debug!(path = ?path, "Config saved");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_ref();

    match cli.command {
        Commands::Catalog { json } => {
            let config = load(config_path)?;
            status::print_catalog(&config, json)?;
        }
        Commands::Status { agent } => {
            let config = load(config_path)?;
            status::print_status(&config, agent.as_deref())?;
        }
        Commands::Toggle { agent, target } => {
            let mut config = load(config_path)?;
            let target = target.into_target();
            let selection =
                toolpick_tools::agents::toggle_agent_tools(&mut config, agent.as_deref(), &target)?;
            tracing::info!(agent = ?agent, target = ?target, "Applied toggle");
            save(&config, config_path)?;
            println!("{}", serde_json::to_string(&selection)?);
        }
        Commands::Describe { agent, all } => {
            let config = load(config_path)?;
            status::print_description(&config, agent.as_deref(), all)?;
        }
        Commands::Import { path } => {
            let mut config = load(config_path)?;
            let content = std::fs::read_to_string(&path)?;
            let agent: toolpick_types::AgentConfig = serde_json::from_str(&content)?;
            let name = agent.name.clone();
            let selection = toolpick_tools::agents::import_agent(&mut config, agent);
            tracing::info!(agent = %name, source = %path.display(), "Imported agent");
            save(&config, config_path)?;
            println!("Imported agent {name}: {}", serde_json::to_string(&selection)?);
        }
        Commands::Canonicalize => {
            let mut config = load(config_path)?;
            let changed = toolpick_tools::agents::canonicalize_agents(&mut config);
            tracing::info!(changed = changed.len(), "Canonicalized agent selections");
            if changed.is_empty() {
                println!("All agent selections are already canonical");
            } else {
                save(&config, config_path)?;
                for name in changed {
                    println!("  updated: {name}");
                }
            }
        }
    }

    Ok(())
}
