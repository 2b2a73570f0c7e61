//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use nameforge::domain::ports::TextGenerationProvider;

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) provider: Arc<dyn TextGenerationProvider>,
}

impl ServerConfig {
    /// Pair a bind address with the provider adapter serving completions.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, provider: Arc<dyn TextGenerationProvider>) -> Self {
        Self {
            bind_addr,
            provider,
        }
    }
}
