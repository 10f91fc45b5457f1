//! HTTP server for Chirpy.
//!
//! Exposes the chirp and user API under `/api`, admin endpoints under
//! `/admin`, and a static file tree under `/app` whose requests are counted.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod router;
pub mod server;
pub mod state;

pub use auth::{AuthProvider, Credentials, Identity, TokenAuth};
pub use config::{ServerConfig, JWT_SECRET_ENV};
pub use error::{ServerError, ServerResult};
pub use metrics::HitCounter;
pub use router::build_router;
pub use server::ChirpyServer;
pub use state::AppState;
