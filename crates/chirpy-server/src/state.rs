use std::sync::Arc;

use chirpy_core::Chirpy;

use crate::auth::{AuthProvider, TokenAuth};
use crate::metrics::HitCounter;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chirpy: Arc<Chirpy>,
    pub auth: Arc<dyn AuthProvider>,
    pub hits: Arc<HitCounter>,
}

impl AppState {
    /// State authenticating callers with the service's own access tokens.
    pub fn new(chirpy: Arc<Chirpy>) -> Self {
        let auth = Arc::new(TokenAuth::new(Arc::clone(&chirpy)));
        Self {
            chirpy,
            auth,
            hits: Arc::new(HitCounter::new()),
        }
    }

    pub fn with_auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = auth;
        self
    }
}
