//! Board occupancy table
//!
//! Bridges notation-level queries to the 64-slot cell collection the
//! rendering layer displays. Holds only occupancy markers; legality of
//! what sits where is the server's problem.

use crate::game::square::{File, Rank, Square};
use crate::game::types::{MoveCommand, PieceKind, PieceMarker, Role};

/// Marker table for all 64 squares, addressed by [`Square`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceMarker>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Board { cells: [None; 64] }
    }
}

impl Board {
    /// An empty board with no markers
    pub fn empty() -> Self {
        Board::default()
    }

    /// The standard chess starting position
    pub fn starting_position() -> Self {
        use PieceKind::*;

        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for col in 0..8u8 {
            let file = File(col);
            board.set_marker(
                Square::new(file, Rank(7)),
                PieceMarker::new(Role::Black, BACK_RANK[col as usize]),
            );
            board.set_marker(
                Square::new(file, Rank(6)),
                PieceMarker::new(Role::Black, Pawn),
            );
            board.set_marker(
                Square::new(file, Rank(1)),
                PieceMarker::new(Role::White, Pawn),
            );
            board.set_marker(
                Square::new(file, Rank(0)),
                PieceMarker::new(Role::White, BACK_RANK[col as usize]),
            );
        }
        board
    }

    /// Marker on the given square, if any
    pub fn marker(&self, square: Square) -> Option<PieceMarker> {
        self.cells[square.index()]
    }

    /// Overwrite the marker on the given square
    pub fn set_marker(&mut self, square: Square, marker: PieceMarker) {
        self.cells[square.index()] = Some(marker);
    }

    /// Remove any marker from the given square
    pub fn clear_marker(&mut self, square: Square) {
        self.cells[square.index()] = None;
    }

    /// Whether a marker is present on `square` and owned by `role`
    ///
    /// This is the client-side "may I pick this up" check, not a chess
    /// legality check. Empty squares are owned by nobody.
    pub fn is_owned_by(&self, square: Square, role: Role) -> bool {
        self.marker(square).is_some_and(|marker| marker.role == role)
    }

    /// Relocate whatever sits on the origin to the destination
    ///
    /// An empty origin clears the destination, mirroring the attribute
    /// carry-over of the reference frontend.
    pub fn apply_move(&mut self, command: &MoveCommand) {
        let marker = self.cells[command.origin.index()].take();
        self.cells[command.dest.index()] = marker;
    }
}
