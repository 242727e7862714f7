use std::sync::Arc;

use tokio::net::TcpListener;
use vsdc_ledger::{InMemoryLedger, IssuanceLedger, RequestValidator};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// VSDC issuance server. Owns the ledger for the lifetime of the process.
pub struct VsdcServer {
    config: ServerConfig,
    ledger: Arc<dyn IssuanceLedger>,
}

impl VsdcServer {
    pub fn new(config: ServerConfig) -> Self {
        let ledger = Arc::new(InMemoryLedger::new(config.verification_base_url.clone()));
        Self { config, ledger }
    }

    /// Serve from an existing ledger instead of a fresh one.
    pub fn with_ledger(mut self, ledger: Arc<dyn IssuanceLedger>) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<dyn IssuanceLedger> {
        &self.ledger
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let state = AppState::new(
            Arc::clone(&self.ledger),
            RequestValidator::new(self.config.min_tin_length),
        );
        build_router(state, self.config.max_body_bytes)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("VSDC server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
