use anyhow::{Context, Result};
use multi_language_translator::{
    config::Config,
    google::GoogleTranslator,
    translation::TranslationRequestHandler,
    web::{create_router, AppState},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("multi_language_translator=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting translator ({}) with provider at {}",
        config.environment, config.translate_api_url
    );
    match config.translate_timeout_secs {
        Some(secs) => info!("Provider timeout: {}s", secs),
        None => info!("Provider timeout: none"),
    }

    let provider = GoogleTranslator::from_config(&config)?;
    let handler = TranslationRequestHandler::new(Arc::new(provider));
    let app = create_router(AppState::new(handler));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
