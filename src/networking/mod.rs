//! Networking module - wire protocol and session wiring
//!
//! The codec and the transport trait are independent of each other; the
//! session ties them to the game state and the frontend channels.

pub mod client;
pub mod error;
pub mod protocol;
pub mod transport;

pub use client::{BoardEvent, Session, SessionEvent, SessionHandle};
pub use error::{NetError, NetResult, ProtocolError, ProtocolResult};
pub use protocol::{ClientMessage, ServerMessage};
pub use transport::{Transport, WsTransport};
