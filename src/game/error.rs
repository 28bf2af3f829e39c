//! Error types for the game module
//!
//! Coordinate errors are contract violations: every square the session
//! handles comes from the fixed 8x8 board, so hitting one of these means
//! a caller fed in a coordinate it never should have had.

/// Errors that can occur in board and coordinate logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Notation is not a file letter 'a'..'h' followed by a rank digit '1'..'8'
    #[error("invalid square notation: {notation:?}")]
    InvalidNotation { notation: String },

    /// Cell index outside [0, 64)
    #[error("cell index {index} out of range")]
    IndexOutOfRange { index: usize },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
