use std::sync::Arc;

use hostup_core::csrf::CsrfSigner;
use hostup_db::store::ContactStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Where contact submissions are persisted.
    pub store: Arc<dyn ContactStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Issues and checks contact form CSRF tokens.
    pub csrf: Arc<CsrfSigner>,
}

impl AppState {
    /// Build state from a store and configuration, deriving the CSRF signer
    /// from the configured secret.
    pub fn new(store: Arc<dyn ContactStore>, config: ServerConfig) -> Self {
        let csrf = CsrfSigner::new(&config.secret_key, config.csrf_time_limit_secs);
        Self {
            store,
            config: Arc::new(config),
            csrf: Arc::new(csrf),
        }
    }
}
