use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is constructed by the composition root and
/// injected here, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portal_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
