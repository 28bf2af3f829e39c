//! Two-click move intent tracking
//!
//! Captures a player's "pick origin, pick destination" click sequence
//! as an explicit two-state machine. The only validation here is the
//! ownership verdict the caller computes for the first click; the
//! destination is accepted unconditionally and arbitrated server-side.

use crate::game::square::Square;
use crate::game::types::MoveCommand;

/// Where the tracker is in the two-click sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntentState {
    #[default]
    AwaitingOrigin,
    AwaitingDestination {
        origin: Square,
    },
}

/// What a single click produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click on a square the player does not own; soft rejection,
    /// surfaced as a notice and never sent anywhere
    Rejected,
    /// First click accepted, origin recorded
    OriginSelected(Square),
    /// Second click completed the pair
    Move(MoveCommand),
}

/// The move intent state machine
///
/// There is no cancel transition: once an origin is recorded, the next
/// click always completes a move command.
// TODO: Handle turns
#[derive(Debug, Default)]
pub struct MoveIntent {
    state: IntentState,
}

impl MoveIntent {
    pub fn new() -> Self {
        MoveIntent::default()
    }

    pub fn state(&self) -> IntentState {
        self.state
    }

    pub fn pending_origin(&self) -> Option<Square> {
        match self.state {
            IntentState::AwaitingOrigin => None,
            IntentState::AwaitingDestination { origin } => Some(origin),
        }
    }

    /// Feed one click into the machine
    ///
    /// `clicker_owns_square` is the board accessor's ownership verdict
    /// for the clicked square; it is only consulted for the first click
    /// of a pair.
    pub fn square_clicked(&mut self, square: Square, clicker_owns_square: bool) -> ClickOutcome {
        match self.state {
            IntentState::AwaitingOrigin => {
                if !clicker_owns_square {
                    return ClickOutcome::Rejected;
                }
                self.state = IntentState::AwaitingDestination { origin: square };
                ClickOutcome::OriginSelected(square)
            }
            IntentState::AwaitingDestination { origin } => {
                self.state = IntentState::AwaitingOrigin;
                ClickOutcome::Move(MoveCommand::new(origin, square))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(notation: &str) -> Square {
        Square::from_notation(notation).unwrap()
    }

    #[test]
    fn starts_awaiting_origin() {
        let intent = MoveIntent::new();
        assert_eq!(intent.state(), IntentState::AwaitingOrigin);
        assert_eq!(intent.pending_origin(), None);
    }

    #[test]
    fn unowned_first_click_is_rejected_without_state_change() {
        let mut intent = MoveIntent::new();
        assert_eq!(intent.square_clicked(sq("e7"), false), ClickOutcome::Rejected);
        assert_eq!(intent.state(), IntentState::AwaitingOrigin);
    }

    #[test]
    fn owned_click_then_any_click_forms_one_move() {
        let mut intent = MoveIntent::new();
        assert_eq!(
            intent.square_clicked(sq("e2"), true),
            ClickOutcome::OriginSelected(sq("e2"))
        );
        assert_eq!(intent.pending_origin(), Some(sq("e2")));

        let outcome = intent.square_clicked(sq("e4"), false);
        match outcome {
            ClickOutcome::Move(command) => assert_eq!(command.to_wire(), "e2e4"),
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(intent.state(), IntentState::AwaitingOrigin);
        assert_eq!(intent.pending_origin(), None);
    }

    #[test]
    fn destination_is_not_validated() {
        // Clicking the origin square again still completes a "move".
        let mut intent = MoveIntent::new();
        intent.square_clicked(sq("g1"), true);
        let outcome = intent.square_clicked(sq("g1"), true);
        match outcome {
            ClickOutcome::Move(command) => assert_eq!(command.to_wire(), "g1g1"),
            other => panic!("expected a move, got {other:?}"),
        }
    }
}
