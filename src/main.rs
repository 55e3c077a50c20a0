use anyhow::Result;
use clap::Parser;
use prompt_relay::app::{build_app, run_server, AppState};
use prompt_relay::config::Config;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "prompt-relay")]
#[command(about = "Relay structured prompt generation requests to Gemini")]
struct CliArgs {
    /// Port to listen on, overriding the PORT environment variable.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = Config::from_env();
    let port = args.port.unwrap_or(config.port);

    info!(
        "Starting prompt-relay on port {} (model: {})",
        port, config.gemini_model
    );

    let state = AppState::from_config(&config);
    let app = build_app(state);

    if let Err(e) = run_server(app, port).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
