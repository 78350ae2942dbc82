//! Daily Hardstyle article bot: generate one topic article and publish it.

use hardstyle_bot::{pipeline, BotConfig, RunProfile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[hardstyle-daily] .env not loaded: {} (using system environment)", e);
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
            tracing::error!(error = %e, "Daily bot cannot start");
            std::process::exit(1);
        }
    };

    match pipeline::run(&config, &RunProfile::daily()).await {
        Ok(()) => tracing::info!("🎉 Daily Hardstyle bot finished successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Daily Hardstyle bot failed");
            std::process::exit(1);
        }
    }
}
