use clap::Subcommand;
use toolpick_tools::ToggleTarget;

#[derive(Subcommand)]
pub enum TargetArgs {
    /// Flip one plugin
    Plugin { name: String },
    /// Flip all plugins together
    AllPlugins,
    /// Flip every tool of one MCP server
    Server { id: String },
    /// Flip one MCP server tool (unique id or server-reported name)
    ServerTool { server: String, tool: String },
    /// Enable every tool, or only the visible ones
    SelectAll {
        /// Ids shown by the current filter; pass with no value for an empty filter
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        visible: Option<Vec<String>>,
    },
    /// Disable every tool, or only the visible ones
    UnselectAll {
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        visible: Option<Vec<String>>,
    },
    /// Enable all plugins, or only the visible plugin names
    SelectPlugins {
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        visible: Option<Vec<String>>,
    },
    /// Disable all plugins, or only the visible plugin names
    UnselectPlugins {
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        visible: Option<Vec<String>>,
    },
    /// Enable the tools of one MCP server
    SelectServer {
        id: String,
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        visible: Option<Vec<String>>,
    },
    /// Disable the tools of one MCP server
    UnselectServer {
        id: String,
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        visible: Option<Vec<String>>,
    },
}

impl TargetArgs {
    pub fn into_target(self) -> ToggleTarget {
        match self {
            TargetArgs::Plugin { name } => ToggleTarget::Plugin { name },
            TargetArgs::AllPlugins => ToggleTarget::AllPlugins,
            TargetArgs::Server { id } => ToggleTarget::ServerTools { server: id },
            TargetArgs::ServerTool { server, tool } => ToggleTarget::ServerTool { server, tool },
            TargetArgs::SelectAll { visible } => ToggleTarget::SelectAll { visible },
            TargetArgs::UnselectAll { visible } => ToggleTarget::UnselectAll { visible },
            TargetArgs::SelectPlugins { visible } => ToggleTarget::SelectPlugins { visible },
            TargetArgs::UnselectPlugins { visible } => ToggleTarget::UnselectPlugins { visible },
            TargetArgs::SelectServer { id, visible } => ToggleTarget::SelectServerTools {
                server: id,
                visible,
            },
            TargetArgs::UnselectServer { id, visible } => ToggleTarget::UnselectServerTools {
                server: id,
                visible,
            },
        }
    }
}
