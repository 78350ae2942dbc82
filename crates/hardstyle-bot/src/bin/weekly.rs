//! Weekly Hardstyle ranking bot: generate this week's artist ranking and
//! publish it.

use hardstyle_bot::{pipeline, BotConfig, RunProfile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[hardstyle-weekly] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Weekly bot cannot start");
            std::process::exit(1);
        }
    };

    match pipeline::run(&config, &RunProfile::weekly()).await {
        Ok(()) => tracing::info!("🎉 Weekly Hardstyle bot finished successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Weekly Hardstyle bot failed");
            std::process::exit(1);
        }
    }
}
