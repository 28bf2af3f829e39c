//! Text-frame transport over a persistent connection
//!
//! The session loop only needs ordered text frames in both directions,
//! so the WebSocket is hidden behind a small trait. Integration tests
//! drive the session with a channel-backed implementation instead of a
//! live socket.

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio_websockets::{ClientBuilder, MaybeTlsStream, Message, WebSocketStream};
use tracing::{debug, info};

use crate::networking::error::{NetError, NetResult};

/// Bidirectional ordered text-frame channel
#[async_trait]
pub trait Transport: Send {
    /// Queue one outbound text frame
    async fn send(&mut self, text: String) -> NetResult<()>;

    /// Next inbound text frame; `None` once the connection is closed
    async fn recv(&mut self) -> Option<NetResult<String>>;
}

/// WebSocket-backed transport
pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl WsTransport {
    /// Connect to the game server at `url` (e.g. `ws://localhost:4220/game`)
    pub async fn connect(url: &str) -> NetResult<Self> {
        let builder = ClientBuilder::new()
            .uri(url)
            .map_err(|error| NetError::InvalidUrl {
                url: url.to_string(),
                reason: error.to_string(),
            })?;

        info!("[NETWORK] Connecting to server at {}", url);
        let (stream, _response) = builder.connect().await?;
        info!("[NETWORK] Connected");

        Ok(WsTransport { stream })
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send(&mut self, text: String) -> NetResult<()> {
        self.stream.send(Message::text(text)).await?;
        Ok(())
    }

    async fn recv(&mut self) -> Option<NetResult<String>> {
        while let Some(item) = self.stream.next().await {
            match item {
                Ok(message) => {
                    if message.is_close() {
                        debug!("[NETWORK] Close frame received");
                        return None;
                    }
                    if let Some(text) = message.as_text() {
                        return Some(Ok(text.to_string()));
                    }
                    // Control and binary frames are not part of the protocol.
                    debug!("[NETWORK] Skipping non-text frame");
                }
                Err(error) => return Some(Err(NetError::Transport(error))),
            }
        }
        None
    }
}
