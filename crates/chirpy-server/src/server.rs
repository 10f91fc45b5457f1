use std::sync::Arc;

use chirpy_core::{Chirpy, Database, JsonFileBackend, PasswordHasher, TokenService};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Chirpy HTTP server.
pub struct ChirpyServer {
    config: ServerConfig,
}

impl ChirpyServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the database and construct the shared service state.
    ///
    /// In debug mode the database file is deleted first.
    pub fn build_state(&self) -> ServerResult<AppState> {
        let secret = self.config.secret()?;
        if self.config.debug {
            JsonFileBackend::remove(&self.config.database_path)?;
        }
        let db = Database::open_file(&self.config.database_path)?;
        let tokens = TokenService::new(secret.as_bytes())
            .map_err(|e| ServerError::Config(e.to_string()))?;
        let chirpy = Chirpy::new(db, tokens)
            .with_hasher(PasswordHasher::with_cost(self.config.bcrypt_cost));
        Ok(AppState::new(Arc::new(chirpy)))
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        Ok(build_router(self.build_state()?, &self.config.static_root))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("Chirpy server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
