//! Piece, role and move command types
//!
//! The marker on an occupied square is a proper record of owning role
//! plus piece kind rather than the `"white-pawn"` style tag the wire
//! and DOM layers use; the tag form is kept as the `Display`/`FromStr`
//! rendering for frontends.

use std::fmt;
use std::str::FromStr;

use crate::game::error::{GameError, GameResult};
use crate::game::square::Square;

/// A player's side for the session, assigned once by the server
///
/// `Spectator` is what the server hands every connection after the
/// first two; spectators own no pieces, so their clicks never pass the
/// origin ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    White,
    Black,
    Spectator,
}

impl Role {
    /// Lowercase wire name, as sent in `role:<name>` messages
    pub fn as_str(self) -> &'static str {
        match self {
            Role::White => "white",
            Role::Black => "black",
            Role::Spectator => "spectator",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "white" => Some(Role::White),
            "black" => Some(Role::Black),
            "spectator" => Some(Role::Spectator),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    /// Capitalized display form ("White"), a presentation concern only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// The six chess piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "pawn" => Some(PieceKind::Pawn),
            "knight" => Some(PieceKind::Knight),
            "bishop" => Some(PieceKind::Bishop),
            "rook" => Some(PieceKind::Rook),
            "queen" => Some(PieceKind::Queen),
            "king" => Some(PieceKind::King),
            _ => None,
        }
    }

    /// One-letter board rendering code (knight is 'N')
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Occupancy marker for a single board square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMarker {
    pub role: Role,
    pub kind: PieceKind,
}

impl PieceMarker {
    pub fn new(role: Role, kind: PieceKind) -> Self {
        PieceMarker { role, kind }
    }
}

impl fmt::Display for PieceMarker {
    /// Tag form used by DOM-style frontends, e.g. `"white-pawn"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.role.as_str(), self.kind.as_str())
    }
}

impl FromStr for PieceMarker {
    type Err = GameError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidNotation {
            notation: tag.to_string(),
        };
        let (role, kind) = tag.split_once('-').ok_or_else(invalid)?;
        Ok(PieceMarker {
            role: Role::from_wire(role).ok_or_else(invalid)?,
            kind: PieceKind::from_name(kind).ok_or_else(invalid)?,
        })
    }
}

/// An origin/destination square pair, the unit of transmission
///
/// Serialized as the bare 4-character concatenation ("e2e4"); the
/// `move:` prefix belongs to the protocol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub origin: Square,
    pub dest: Square,
}

impl MoveCommand {
    pub fn new(origin: Square, dest: Square) -> Self {
        MoveCommand { origin, dest }
    }

    /// Parse the 4-character wire form, origin first
    pub fn from_wire(wire: &str) -> GameResult<Self> {
        if wire.len() != 4 || !wire.is_ascii() {
            return Err(GameError::InvalidNotation {
                notation: wire.to_string(),
            });
        }
        Ok(MoveCommand {
            origin: Square::from_notation(&wire[..2])?,
            dest: Square::from_notation(&wire[2..])?,
        })
    }

    pub fn to_wire(self) -> String {
        format!("{}{}", self.origin, self.dest)
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_and_display_forms() {
        assert_eq!(Role::from_wire("black"), Some(Role::Black));
        assert_eq!(Role::from_wire("purple"), None);
        assert_eq!(Role::White.as_str(), "white");
        assert_eq!(Role::White.to_string(), "White");
        assert_eq!(Role::Spectator.to_string(), "Spectator");
    }

    #[test]
    fn marker_tag_round_trip() {
        let marker = PieceMarker::new(Role::White, PieceKind::Pawn);
        assert_eq!(marker.to_string(), "white-pawn");
        assert_eq!("white-pawn".parse::<PieceMarker>().unwrap(), marker);
        assert!("white_pawn".parse::<PieceMarker>().is_err());
        assert!("green-pawn".parse::<PieceMarker>().is_err());
    }

    #[test]
    fn move_command_wire_form() {
        let command = MoveCommand::from_wire("e2e4").unwrap();
        assert_eq!(command.origin.to_string(), "e2");
        assert_eq!(command.dest.to_string(), "e4");
        assert_eq!(command.to_wire(), "e2e4");
    }

    #[test]
    fn move_command_rejects_bad_wire_forms() {
        for bad in ["", "e2", "e2e", "e2e44", "e9e4", "e2i4"] {
            assert!(MoveCommand::from_wire(bad).is_err(), "accepted {bad:?}");
        }
    }
}
