use std::sync::Arc;

use lenscraft_gateway::generation::ImageGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound image generation.
    pub gateway: Arc<dyn ImageGateway>,
}
