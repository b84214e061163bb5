//! Elo Comunitário - console entry point.

use std::io;
use std::sync::Arc;

use elo_comunitario::{
    cli,
    config::Config,
    llm::{CompletionClient, GeminiClient},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (to stderr, so stage output stays clean on stdout)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elo_comunitario=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration: model={}", config.model);

    let client: Arc<dyn CompletionClient> = Arc::new(GeminiClient::new(config.api_key.clone()));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    cli::run(client, &config.model, &mut input, &mut output).await
}
