use std::env;
use std::sync::Arc;

use chat_core::ChatLog;
use summarizer_client::{HttpSummarizer, SummarizerConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_service::server::{run, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    tracing::info!("Starting chat summarization service...");

    // Get port from environment variable or use default
    let port = env::var("APP_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let config = SummarizerConfig::new();
    tracing::info!(
        "Summarization backend: {} (model {})",
        config.api_base,
        config.model
    );

    let app_state = AppState {
        chat_log: ChatLog::new(),
        summarizer: Arc::new(HttpSummarizer::new(config)),
    };

    if let Err(e) = run(app_state, port).await {
        tracing::error!("Failed to run web service: {}", e);
        std::process::exit(1);
    }
}
