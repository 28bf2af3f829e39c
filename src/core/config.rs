//! Client configuration

/// Default game endpoint of the reference server
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:4220/game";

/// Settings for one client run
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket URL of the game endpoint
    pub server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        ClientConfig {
            server_url: server_url.into(),
        }
    }
}
