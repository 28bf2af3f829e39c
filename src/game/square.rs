//! Board coordinates and algebraic notation
//!
//! Provides newtype patterns for chess coordinates and the conversions
//! between algebraic notation ("e2") and the linear cell index used by
//! the rendering layer. The index is row-major from the top-left of the
//! rendered board, so `a8` is index 0 and `h1` is index 63.

use std::fmt;

use crate::game::error::{GameError, GameResult};

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
/// This newtype prevents mixing up file and rank coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(pub u8);

impl File {
    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a rank (row) on the chessboard
///
/// Values range from 0 (rank 1) to 7 (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a rank from a digit character ('1'..='8')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Rank(c as u8 - b'1')),
            _ => None,
        }
    }

    /// Convert rank to digit character ('1'..='8')
    pub fn to_char(self) -> char {
        (b'1' + self.0) as char
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// A single square on the board, identified by file and rank
///
/// The canonical text form is two characters of algebraic notation,
/// file letter first: `"e2"`. The canonical numeric form is the
/// top-left row-major cell index: `index = (7 - rank) * 8 + file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    pub fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// Parse two-character algebraic notation
    ///
    /// Fails with [`GameError::InvalidNotation`] unless the input is
    /// exactly a file letter 'a'..='h' followed by a rank digit '1'..='8'.
    pub fn from_notation(notation: &str) -> GameResult<Self> {
        let invalid = || GameError::InvalidNotation {
            notation: notation.to_string(),
        };

        let mut chars = notation.chars();
        let file = chars.next().and_then(File::from_char).ok_or_else(invalid)?;
        let rank = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Square { file, rank })
    }

    /// Build a square from its cell index
    ///
    /// Fails with [`GameError::IndexOutOfRange`] unless `index < 64`.
    pub fn from_index(index: usize) -> GameResult<Self> {
        if index >= 64 {
            return Err(GameError::IndexOutOfRange { index });
        }
        let row = (index / 8) as u8;
        let col = (index % 8) as u8;
        Ok(Square {
            file: File(col),
            rank: Rank(7 - row),
        })
    }

    /// Cell index in the rendering layer's square collection
    ///
    /// Row-major from the top-left: rank 8 is row 0, so `a8` maps to 0
    /// and `h1` maps to 63.
    pub fn index(self) -> usize {
        let row = 7 - self.rank.index() as usize;
        row * 8 + self.file.index() as usize
    }

    /// Algebraic notation, e.g. `"e2"`
    pub fn notation(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file.to_char());
        s.push(self.rank.to_char());
        s
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_char())
    }
}
