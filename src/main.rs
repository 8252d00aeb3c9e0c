//! Transfer search service binary.

use anyhow::Context;
use std::sync::Arc;
use transfer_search::api::rest::{AppState, create_router};
use transfer_search::application::services::{SearchOrchestrator, SupplierRegistry};
use transfer_search::config::Settings;
use transfer_search::infrastructure::suppliers::{HttpSupplierAdapter, TransferSupplier};
use transfer_search::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    telemetry::init_tracing(&settings.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))?;

    let switchboard = settings.switchboard()?;
    let mut suppliers: Vec<Arc<dyn TransferSupplier>> = Vec::with_capacity(settings.suppliers.len());
    for supplier in &settings.suppliers {
        let config = supplier.to_http_config()?;
        let switch = switchboard
            .switch(&config.code)
            .with_context(|| format!("no switch for supplier {}", config.code))?;
        let adapter = HttpSupplierAdapter::new(config, switch)
            .with_context(|| format!("failed to build supplier {}", supplier.code))?;
        tracing::info!(
            supplier = %supplier.code,
            url = adapter.search_url(),
            enabled = supplier.enabled,
            "supplier configured"
        );
        suppliers.push(Arc::new(adapter));
    }

    let registry = Arc::new(SupplierRegistry::new(suppliers));
    if registry.is_empty() {
        tracing::warn!("no suppliers configured, searches will return no offers");
    }
    let orchestrator = Arc::new(SearchOrchestrator::new(
        registry,
        settings.orchestrator_config(),
    ));
    let router = create_router(Arc::new(AppState::new(orchestrator, switchboard)));

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "transfer search listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
