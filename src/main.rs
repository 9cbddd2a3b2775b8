use clap::{Parser, Subcommand};
use eatsy::app::{handle_fatal_error, init_logging, AppConfig};
use eatsy::{InMemoryRecipeRegistry, RecipeServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Keep a recipe book in memory and serve it over HTTP
#[derive(Parser)]
#[command(name = "eatsy")]
#[command(about = "Eatsy - an in-memory recipe book served over HTTP", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the recipe API
    Serve {
        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Address to bind (overrides the configuration file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides the configuration file)
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Allow cross-origin requests from any origin
        #[arg(long)]
        cors: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        handle_fatal_error(e, verbose);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            cors,
        } => {
            let mut app_config = AppConfig::load(config.as_deref())?.with_verbose(cli.verbose);
            if let Some(host) = host {
                app_config = app_config.with_host(host);
            }
            if let Some(port) = port {
                app_config = app_config.with_port(port);
            }
            if cors {
                app_config = app_config.with_cors(true);
            }

            init_logging(&app_config);
            debug!("Resolved configuration: {:?}", app_config);

            let registry = Arc::new(InMemoryRecipeRegistry::default());
            RecipeServer::new(registry, app_config.server).serve().await
        }
    }
}
