use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordcard_config::Config;

pub mod controller;
pub mod events;
pub mod profile;
pub mod services;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordcard", version, about = "Author English vocabulary flashcards")]
struct Cli {
    /// JSON profile to load, created from the environment if missing
    #[arg(long)]
    profile: Option<PathBuf>,

    /// User whose decks receive the cards
    #[arg(long)]
    user: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = match &cli.profile {
        Some(path) => profile::load_or_init(path)?,
        None => Config::new(),
    };
    if let Some(user) = cli.user {
        config.user_id = user;
    }
    if config.user_id.is_empty() {
        tracing::warn!("No user id configured, cards cannot be saved");
    }

    let services = services::build(&config)?;
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(services);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
