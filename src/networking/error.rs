//! Error types for the networking module

use crate::game::GameError;

/// Errors that can occur while decoding inbound frames
///
/// Malformed frames are recovered locally: the session logs them and
/// drops the frame, nothing crosses back to the server.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Frame does not match any `kind:payload` shape the protocol defines
    #[error("malformed message: {raw:?}")]
    MalformedMessage { raw: String },
}

impl ProtocolError {
    pub fn malformed(raw: impl Into<String>) -> Self {
        ProtocolError::MalformedMessage { raw: raw.into() }
    }
}

/// Result type alias for codec operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur on the channel connection
///
/// All of these are fatal for the session; there is no reconnection.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// Server URL did not parse
    #[error("invalid server url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// WebSocket transport failure
    #[error("websocket transport error: {0}")]
    Transport(#[from] tokio_websockets::Error),

    /// A coordinate escaped the fixed 8x8 board; programming error
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Result type alias for transport and session operations
pub type NetResult<T> = Result<T, NetError>;
