//! Mensa KA MCP Server — entry point.

use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter};

use mensa_ka::{HttpMenuSource, MenuDate, MenuSource};
use mensa_ka_mcp::config::resolve_origin;
use mensa_ka_mcp::protocol::{LevelHook, ProtocolHandler};
use mensa_ka_mcp::tools::ToolRegistry;
use mensa_ka_mcp::transport::StdioTransport;
use mensa_ka_mcp::types::LogLevel;

#[derive(Parser)]
#[command(
    name = "mensa-ka-mcp",
    about = "MCP server for Mensa Karlsruhe — daily menus and available dates for LLM agents",
    version
)]
struct Cli {
    /// Base URL of the published menu files.
    /// Also reads from MENSA_ORIGIN env var.
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Timeout in seconds for requests to the origin (none by default).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Start MCP server over HTTP.
    #[cfg(feature = "http")]
    ServeHttp {
        /// Listen address (host:port).
        #[arg(long, default_value = mensa_ka_mcp::transport::http::DEFAULT_ADDR)]
        addr: String,
    },

    /// Print the dates that currently have a published menu.
    Dates,

    /// Print the menu for one date as JSON.
    Menu {
        /// Date in YYYY-MM-DD format.
        date: String,
    },

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   mensa-ka-mcp completions bash > ~/.local/share/bash-completion/completions/mensa-ka-mcp
    ///   mensa-ka-mcp completions zsh > ~/.zfunc/_mensa-ka-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

fn build_source(cli: &Cli) -> anyhow::Result<HttpMenuSource> {
    let origin = resolve_origin(cli.origin.as_deref());
    tracing::info!("Menu origin: {origin}");

    let mut builder = reqwest::Client::builder().user_agent(mensa_ka::fetch::USER_AGENT);
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(HttpMenuSource::with_client(origin, builder.build()?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let (filter, filter_handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Clients may change verbosity at runtime with logging/setLevel.
    let level_hook: LevelHook = Arc::new(move |level: LogLevel| {
        if let Err(e) = filter_handle.reload(EnvFilter::new(level.filter_directive())) {
            tracing::warn!("Could not apply log level {level}: {e}");
        }
    });

    match cli.command.as_ref().unwrap_or(&Commands::Serve) {
        Commands::Serve => {
            let source = Arc::new(build_source(&cli)?);
            let handler = ProtocolHandler::new(source).with_level_hook(level_hook);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        #[cfg(feature = "http")]
        Commands::ServeHttp { addr } => {
            use mensa_ka_mcp::transport::HttpTransport;

            tracing::info!("Mensa KA MCP server");
            let source = Arc::new(build_source(&cli)?);
            let handler = ProtocolHandler::new(source).with_level_hook(level_hook);
            let transport = HttpTransport::new(handler);
            transport.run(addr).await?;
        }

        Commands::Dates => {
            let source = build_source(&cli)?;
            match source.available_dates().await {
                Ok(dates) => {
                    for date in dates {
                        println!("{date}");
                    }
                }
                Err(e) => {
                    eprintln!("error fetching available dates: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Menu { date } => {
            let date = match MenuDate::parse(date) {
                Ok(date) => date,
                Err(_) => {
                    eprintln!("invalid date. Use YYYY-MM-DD format");
                    std::process::exit(2);
                }
            };
            let source = build_source(&cli)?;
            match source.menu_for_date(date).await {
                Ok(menu) => println!("{}", serde_json::to_string_pretty(&menu)?),
                Err(e) => {
                    eprintln!("error fetching menu: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Info => {
            let capabilities = mensa_ka_mcp::types::InitializeResult::for_server();
            let tools = ToolRegistry::list_tools();
            let templates = mensa_ka_mcp::resources::ResourceRegistry::list_templates();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "resource_templates": templates.iter().map(|t| &t.uri_template).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "mensa-ka-mcp", &mut std::io::stdout());
        }
    }

    Ok(())
}
