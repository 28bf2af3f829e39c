//! Chessline - a client for a two-player chess server
//!
//! Talks the server's colon-delimited text protocol over a persistent
//! WebSocket connection, captures two-click move intents, and applies
//! broadcast moves to a local board. Legality and turn arbitration are
//! entirely server-side; the client only checks that the first click of
//! a pair lands on one of the player's own pieces.

pub mod core;
pub mod game;
pub mod networking;
pub mod ui;

pub use game::{Board, ClickOutcome, MoveCommand, MoveIntent, Role, Square};
pub use networking::{BoardEvent, Session, SessionEvent, SessionHandle};
