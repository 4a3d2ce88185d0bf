use std::sync::Arc;

use tokio::net::TcpListener;

use crate::adapters::OpenAiClient;
use crate::app::routes::create_router;
use crate::app::state::AppState;
use crate::config::toml_config::ModelSettings;
use crate::config::ServerConfig;
use crate::core::predictor::CacPredictor;
use crate::utils::error::Result;

/// 由啟動配置組出完整的 handler state
pub fn build_state(config: &ServerConfig, settings: ModelSettings) -> Result<AppState> {
    let client = OpenAiClient::with_timeout(&config.api_url, &config.api_key, settings.timeout())?;
    Ok(AppState::new(CacPredictor::new(Arc::new(client), settings)))
}

pub async fn run_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = create_router(state);

    tracing::debug!("Binding {}", config.addr());
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("🌐 Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
