//! curp-ocr-server - Entry point

use curp_ocr_server::{run_server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curp_ocr_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Missing COHERE_API_KEY aborts here, before anything is served
    let config = ServerConfig::from_env()?;

    tracing::info!("Starting extraction server");
    run_server(config).await
}
