use anyhow::Result;
use clap::{Parser, Subcommand};

/// weekmenu - household pantry and weekly menu planner
#[derive(Parser)]
#[command(name = "weekmenu")]
#[command(about = "Plan a week of meals from what is left in the pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = weekmenu::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekmenu::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => weekmenu::cli::serve(config, host, port).await,
        Commands::Migrate => weekmenu::cli::migrate(config).await,
        Commands::Reset => weekmenu::cli::reset(config).await,
    }
}
