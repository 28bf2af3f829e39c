//! Wire protocol codec
//!
//! The server speaks colon-delimited text frames whose first token is
//! the message kind: `role:black`, `move:e2e4`. Tagged enums replace
//! the stringly dispatch of the reference frontend. The server appends
//! a next-to-move token when it relays moves (`move:e2e4:black`), which
//! clients ignore, so trailing tokens are accepted and dropped.

use crate::game::{MoveCommand, Role};
use crate::networking::error::{ProtocolError, ProtocolResult};

/// Messages the server sends to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMessage {
    /// `role:<white|black|spectator>`, sent once after the handshake
    RoleAssigned(Role),
    /// `move:<4-char move>`, a move made by the other player
    OpponentMoved(MoveCommand),
}

impl ServerMessage {
    /// Decode one inbound text frame
    ///
    /// Returns `Ok(None)` for frames with a well-formed but unrecognized
    /// kind token, which are silently ignored per the reference behavior.
    pub fn parse(raw: &str) -> ProtocolResult<Option<Self>> {
        let malformed = || ProtocolError::malformed(raw);

        let (kind, payload) = raw.split_once(':').ok_or_else(malformed)?;
        if kind.is_empty() || payload.is_empty() {
            return Err(malformed());
        }

        match kind {
            "role" => {
                let role = Role::from_wire(payload).ok_or_else(malformed)?;
                Ok(Some(ServerMessage::RoleAssigned(role)))
            }
            "move" => {
                // Drop the relay's trailing next-to-move token if present.
                let wire = payload.split(':').next().ok_or_else(malformed)?;
                let command = MoveCommand::from_wire(wire).map_err(|_| malformed())?;
                Ok(Some(ServerMessage::OpponentMoved(command)))
            }
            _ => Ok(None),
        }
    }
}

/// Messages the client sends to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMessage {
    /// A completed two-click move, sent as `move:<origin><dest>`
    Move(MoveCommand),
}

impl ClientMessage {
    /// Encode as a text frame
    pub fn encode(self) -> String {
        match self {
            ClientMessage::Move(command) => format!("move:{}", command.to_wire()),
        }
    }
}
