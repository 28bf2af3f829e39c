//! Game module - board domain logic for the chess client
//!
//! Covers the pieces of the client that carry real invariants: the
//! coordinate/notation mapping, the board occupancy table, and the
//! two-click move intent tracker. Everything here is synchronous and
//! free of I/O; the networking layer drives it.

pub mod board;
pub mod error;
pub mod intent;
pub mod square;
pub mod types;

pub use board::Board;
pub use error::{GameError, GameResult};
pub use intent::{ClickOutcome, IntentState, MoveIntent};
pub use square::{File, Rank, Square};
pub use types::{MoveCommand, PieceKind, PieceMarker, Role};
