//! Telemetr-a orchestrator - Application entry point
//!
//! CLI-based entry point; with no subcommand it starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telemetra_orchestrator::{
    cli::{args::ServeArgs, Cli, Commands},
    commands,
    config::Config,
    errors::AppResult,
};

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap's `env` fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        tracing::error!("Command failed: {:?}", e);
        std::process::exit(1);
    }
}

/// Load configuration and execute the requested command (serve by default)
async fn run(command: Option<Commands>) -> AppResult<()> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let command = command.unwrap_or_else(|| Commands::Serve(ServeArgs::from_config(&config)));

    match command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
