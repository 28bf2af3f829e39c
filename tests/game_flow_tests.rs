//! End-to-end session tests over a mock transport
//!
//! Drives a [`Session`] with channel-backed frames instead of a live
//! WebSocket, covering role assignment, the two-click move flow, and
//! the handling of bad input from both sides.

use async_trait::async_trait;
use tokio::sync::mpsc;

use chessline::game::{MoveCommand, Role, Square};
use chessline::networking::{
    BoardEvent, NetResult, Session, SessionEvent, SessionHandle, Transport,
};

/// Transport fed and observed through unbounded channels
struct MockTransport {
    inbound: mpsc::UnboundedReceiver<String>,
    outbound: mpsc::UnboundedSender<String>,
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, text: String) -> NetResult<()> {
        self.outbound.send(text).expect("test dropped the outbound receiver");
        Ok(())
    }

    async fn recv(&mut self) -> Option<NetResult<String>> {
        self.inbound.recv().await.map(Ok)
    }
}

struct Harness {
    server_tx: mpsc::UnboundedSender<String>,
    server_rx: mpsc::UnboundedReceiver<String>,
    handle: SessionHandle,
    task: tokio::task::JoinHandle<NetResult<()>>,
}

fn start_session() -> Harness {
    let (server_tx, inbound) = mpsc::unbounded_channel();
    let (outbound, server_rx) = mpsc::unbounded_channel();
    let transport = MockTransport { inbound, outbound };
    let (session, handle) = Session::new(transport);
    let task = tokio::spawn(session.run());
    Harness {
        server_tx,
        server_rx,
        handle,
        task,
    }
}

fn sq(notation: &str) -> Square {
    Square::from_notation(notation).unwrap()
}

async fn next_event(handle: &mut SessionHandle) -> SessionEvent {
    handle.events.recv().await.expect("session ended early")
}

#[tokio::test]
async fn two_click_sequence_sends_one_move_and_applies_the_echo() {
    let mut h = start_session();

    h.server_tx.send("role:white".to_string()).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::RoleAssigned(Role::White)
    );

    h.handle.inputs.send(BoardEvent::SquareClicked(sq("d2"))).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::OriginSelected(sq("d2"))
    );

    h.handle.inputs.send(BoardEvent::SquareClicked(sq("d4"))).unwrap();
    assert_eq!(h.server_rx.recv().await, Some("move:d2d4".to_string()));

    // The server broadcasts the move back with the next-to-move token;
    // that echo is what updates the board.
    h.server_tx.send("move:d2d4:black".to_string()).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::MoveApplied(MoveCommand::from_wire("d2d4").unwrap())
    );

    drop(h.server_tx);
    assert_eq!(next_event(&mut h.handle).await, SessionEvent::Disconnected);
    h.task.await.unwrap().unwrap();
}

#[tokio::test]
async fn unowned_first_click_is_rejected_and_sends_nothing() {
    let mut h = start_session();

    h.server_tx.send("role:white".to_string()).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::RoleAssigned(Role::White)
    );

    // e7 holds a black pawn.
    h.handle.inputs.send(BoardEvent::SquareClicked(sq("e7"))).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::OriginRejected(sq("e7"))
    );

    // The rejection left the tracker awaiting an origin.
    h.handle.inputs.send(BoardEvent::SquareClicked(sq("e2"))).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::OriginSelected(sq("e2"))
    );

    assert!(matches!(
        h.server_rx.try_recv(),
        Err(mpsc::error::TryRecvError::Empty)
    ));
}

#[tokio::test]
async fn clicks_before_role_assignment_are_rejected() {
    let mut h = start_session();

    h.handle.inputs.send(BoardEvent::SquareClicked(sq("e2"))).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::OriginRejected(sq("e2"))
    );
}

#[tokio::test]
async fn spectators_own_no_squares() {
    let mut h = start_session();

    h.server_tx.send("role:spectator".to_string()).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::RoleAssigned(Role::Spectator)
    );

    h.handle.inputs.send(BoardEvent::SquareClicked(sq("e2"))).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::OriginRejected(sq("e2"))
    );
}

#[tokio::test]
async fn role_is_fixed_after_first_assignment() {
    let mut h = start_session();

    h.server_tx.send("role:white".to_string()).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::RoleAssigned(Role::White)
    );

    // A second assignment is ignored: e2 is still ours afterwards.
    h.server_tx.send("role:black".to_string()).unwrap();
    h.handle.inputs.send(BoardEvent::SquareClicked(sq("e2"))).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::OriginSelected(sq("e2"))
    );
}

#[tokio::test]
async fn opponent_moves_are_applied_to_the_board() {
    let mut h = start_session();

    h.server_tx.send("role:white".to_string()).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::RoleAssigned(Role::White)
    );

    h.server_tx.send("move:g8f6:white".to_string()).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::MoveApplied(MoveCommand::from_wire("g8f6").unwrap())
    );
}

#[tokio::test]
async fn malformed_and_unknown_frames_are_dropped_without_killing_the_session() {
    let mut h = start_session();

    h.server_tx.send("garbage".to_string()).unwrap();
    h.server_tx.send("move:e9e4".to_string()).unwrap();
    h.server_tx.send("ping:1".to_string()).unwrap();
    h.server_tx.send("role:black".to_string()).unwrap();

    // Only the valid frame produces an event, and the session survived
    // the bad ones to deliver it.
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::RoleAssigned(Role::Black)
    );
}

#[tokio::test]
async fn hover_events_surface_the_current_square() {
    let mut h = start_session();

    h.handle.inputs.send(BoardEvent::SquareEntered(sq("c3"))).unwrap();
    assert_eq!(
        next_event(&mut h.handle).await,
        SessionEvent::SquareHovered(sq("c3"))
    );

    h.handle.inputs.send(BoardEvent::SquareLeft).unwrap();
    assert_eq!(next_event(&mut h.handle).await, SessionEvent::HoverCleared);
}
