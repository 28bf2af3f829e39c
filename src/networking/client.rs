//! Game session over a transport
//!
//! [`Session`] owns everything the connection accumulates: the assigned
//! role, the board occupancy table, and the move intent tracker. It is
//! constructed once per connection and driven by a single select loop,
//! so no two state transitions ever overlap and inbound frames are
//! handled strictly in arrival order.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::game::{Board, ClickOutcome, MoveCommand, MoveIntent, Role, Square};
use crate::networking::error::NetResult;
use crate::networking::protocol::{ClientMessage, ServerMessage};
use crate::networking::transport::Transport;

/// Pointer events coming in from the board frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    SquareClicked(Square),
    SquareEntered(Square),
    SquareLeft,
}

/// Display updates going out to the board frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The server assigned this client its side
    RoleAssigned(Role),
    /// Pointer is over a square; show the transient current-square label
    SquareHovered(Square),
    /// Pointer left the board; clear the current-square label
    HoverCleared,
    /// First click accepted, the square is highlighted as the origin
    OriginSelected(Square),
    /// First click on a square the player does not own
    OriginRejected(Square),
    /// A move (own echo or opponent's) was applied to the board
    MoveApplied(MoveCommand),
    /// The connection is gone; no reconnection is attempted
    Disconnected,
}

/// Frontend half of the session wiring
///
/// Send [`BoardEvent`]s into `inputs`, read [`SessionEvent`]s from
/// `events`. Dropping `inputs` ends the session loop.
pub struct SessionHandle {
    pub inputs: mpsc::UnboundedSender<BoardEvent>,
    pub events: mpsc::UnboundedReceiver<SessionEvent>,
}

/// One client session on one connection
pub struct Session<T: Transport> {
    transport: T,
    board: Board,
    intent: MoveIntent,
    role: Option<Role>,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    input_rx: mpsc::UnboundedReceiver<BoardEvent>,
}

impl<T: Transport> Session<T> {
    /// Build a session over `transport` with the standard starting
    /// position, returning the frontend handle alongside it
    pub fn new(transport: T) -> (Self, SessionHandle) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (input_tx, input_rx) = mpsc::unbounded_channel();

        let session = Session {
            transport,
            board: Board::starting_position(),
            intent: MoveIntent::new(),
            role: None,
            event_tx,
            input_rx,
        };
        let handle = SessionHandle {
            inputs: input_tx,
            events: event_rx,
        };
        (session, handle)
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Drive the session until the server or the frontend goes away
    pub async fn run(mut self) -> NetResult<()> {
        loop {
            tokio::select! {
                inbound = self.transport.recv() => match inbound {
                    Some(Ok(frame)) => self.handle_frame(&frame),
                    Some(Err(error)) => {
                        warn!("[NETWORK] Transport error: {}", error);
                        self.emit(SessionEvent::Disconnected);
                        return Err(error);
                    }
                    None => {
                        info!("[NETWORK] Connection closed by server");
                        self.emit(SessionEvent::Disconnected);
                        return Ok(());
                    }
                },
                input = self.input_rx.recv() => match input {
                    Some(event) => self.handle_board_event(event).await?,
                    None => {
                        info!("[NETWORK] Frontend hung up, ending session");
                        return Ok(());
                    }
                },
            }
        }
    }

    fn handle_frame(&mut self, raw: &str) {
        match ServerMessage::parse(raw) {
            Ok(Some(ServerMessage::RoleAssigned(role))) => {
                if let Some(current) = self.role {
                    warn!(
                        "[GAME] Ignoring role reassignment to {} (already {})",
                        role, current
                    );
                    return;
                }
                info!("[GAME] Assigned role: {}", role);
                self.role = Some(role);
                self.emit(SessionEvent::RoleAssigned(role));
            }
            Ok(Some(ServerMessage::OpponentMoved(command))) => {
                info!("[GAME] Applying move {}", command);
                self.board.apply_move(&command);
                self.emit(SessionEvent::MoveApplied(command));
            }
            Ok(None) => {
                debug!("[GAME] Ignoring unrecognized message: {:?}", raw);
            }
            Err(error) => {
                warn!("[GAME] Dropping frame: {}", error);
            }
        }
    }

    async fn handle_board_event(&mut self, event: BoardEvent) -> NetResult<()> {
        match event {
            BoardEvent::SquareClicked(square) => self.handle_click(square).await?,
            BoardEvent::SquareEntered(square) => self.emit(SessionEvent::SquareHovered(square)),
            BoardEvent::SquareLeft => self.emit(SessionEvent::HoverCleared),
        }
        Ok(())
    }

    async fn handle_click(&mut self, square: Square) -> NetResult<()> {
        // No role yet means no pieces are ours to pick up.
        let owns_square = self
            .role
            .is_some_and(|role| self.board.is_owned_by(square, role));

        match self.intent.square_clicked(square, owns_square) {
            ClickOutcome::Rejected => {
                debug!("[GAME] Wrong square: {}", square);
                self.emit(SessionEvent::OriginRejected(square));
            }
            ClickOutcome::OriginSelected(origin) => {
                debug!("[GAME] Origin selected: {}", origin);
                self.emit(SessionEvent::OriginSelected(origin));
            }
            ClickOutcome::Move(command) => {
                // The board is not touched here: the server broadcasts
                // every move back to all clients, sender included, and
                // the echo drives the single apply path above.
                info!("[GAME] Submitting move {}", command);
                self.transport.send(ClientMessage::Move(command).encode()).await?;
            }
        }
        Ok(())
    }

    fn emit(&self, event: SessionEvent) {
        // The frontend may already be gone during shutdown.
        let _ = self.event_tx.send(event);
    }
}
