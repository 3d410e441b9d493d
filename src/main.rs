// src/main.rs — FrontFusion entry point

use clap::Parser;
use std::sync::{Arc, Mutex};

use frontfusion::api::{self, ApiState};
use frontfusion::bundler::BundleCompiler;
use frontfusion::cli::{Cli, Commands};
use frontfusion::infra::config::Config;
use frontfusion::infra::{logger, paths};
use frontfusion::provider::GeminiClient;
use frontfusion::session;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("info");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Some(Commands::InitDb) => {
            paths::ensure_dirs().await?;
            let db = paths::db_path();
            session::open(&db)?;
            println!("database ready at {}", db.display());
            Ok(())
        }
        Some(Commands::Serve { port }) => {
            serve(&config, port.unwrap_or(config.server.port)).await
        }
        None => serve(&config, config.server.port).await,
    }
}

async fn serve(config: &Config, port: u16) -> anyhow::Result<()> {
    paths::ensure_dirs().await?;

    let store = session::open(&paths::db_path())?;
    let model = GeminiClient::from_config(&config.provider)?;
    let compiler = BundleCompiler::from_config(&config.bundler);

    let state = ApiState {
        store: Arc::new(Mutex::new(store)),
        model: Arc::new(model),
        compiler: Arc::new(compiler),
        owners: Arc::new(config.server.owners.clone()),
    };

    api::start_server(port, state).await
}
