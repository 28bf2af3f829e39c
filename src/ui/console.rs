//! Console board frontend
//!
//! Stand-in for the web page the reference client runs in. Translates
//! stdin lines into pointer events and session events into prints; it
//! keeps its own display copy of the board and contains no game logic.
//!
//! Commands: a bare square (`e2`) clicks it, `hover e2` / `leave` are
//! the pointer-enter and pointer-leave events, `board` reprints, `quit`
//! exits.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::game::{Board, Square};
use crate::networking::{BoardEvent, SessionEvent, SessionHandle};

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Click(Square),
    Hover(Square),
    Leave,
    Board,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line {
        "leave" => return Ok(Command::Leave),
        "board" => return Ok(Command::Board),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    if let Some(notation) = line.strip_prefix("hover ") {
        let square = Square::from_notation(notation.trim())
            .map_err(|_| format!("not a square: {notation:?}"))?;
        return Ok(Command::Hover(square));
    }

    Square::from_notation(line)
        .map(Command::Click)
        .map_err(|_| format!("unknown command: {line:?} (try e2, hover e2, leave, board, quit)"))
}

/// Render the display board as ASCII, rank 8 at the top
///
/// White pieces are uppercase, black lowercase, empty squares dots.
fn render(board: &Board) -> String {
    use crate::game::{File, Rank, Role};

    let mut out = String::new();
    for rank in (0..8u8).rev() {
        out.push(Rank(rank).to_char());
        out.push(' ');
        for file in 0..8u8 {
            out.push(' ');
            let square = Square::new(File(file), Rank(rank));
            match board.marker(square) {
                Some(marker) => {
                    let letter = marker.kind.letter();
                    out.push(match marker.role {
                        Role::Black => letter.to_ascii_lowercase(),
                        _ => letter,
                    });
                }
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h");
    out
}

/// Run the console frontend until the session ends or the user quits
pub async fn run(mut handle: SessionHandle) {
    let mut board = Board::starting_position();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render(&board));
    println!("Waiting for role assignment...");

    loop {
        tokio::select! {
            event = handle.events.recv() => {
                let Some(event) = event else { break };
                match event {
                    SessionEvent::RoleAssigned(role) => println!("You are {role}"),
                    SessionEvent::SquareHovered(square) => {
                        println!("Current square is {square}");
                    }
                    SessionEvent::HoverCleared => debug!("[UI] Hover cleared"),
                    SessionEvent::OriginSelected(square) => println!("Picked up {square}"),
                    SessionEvent::OriginRejected(square) => println!("Wrong square: {square}"),
                    SessionEvent::MoveApplied(command) => {
                        board.apply_move(&command);
                        println!("Move: {command}");
                        println!("{}", render(&board));
                    }
                    SessionEvent::Disconnected => {
                        println!("Disconnected from server");
                        break;
                    }
                }
            }
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(Command::Click(square)) => {
                        if handle.inputs.send(BoardEvent::SquareClicked(square)).is_err() {
                            break;
                        }
                    }
                    Ok(Command::Hover(square)) => {
                        let _ = handle.inputs.send(BoardEvent::SquareEntered(square));
                    }
                    Ok(Command::Leave) => {
                        let _ = handle.inputs.send(BoardEvent::SquareLeft);
                    }
                    Ok(Command::Board) => println!("{}", render(&board)),
                    Ok(Command::Quit) => break,
                    Err(message) => println!("{message}"),
                }
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
    fn parses_commands() {
        assert_eq!(parse_command("e2"), Ok(Command::Click(sq("e2"))));
        assert_eq!(parse_command("hover d4"), Ok(Command::Hover(sq("d4"))));
        assert_eq!(parse_command(" leave "), Ok(Command::Leave));
        assert_eq!(parse_command("board"), Ok(Command::Board));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("e9").is_err());
        assert!(parse_command("hover zz").is_err());
    }

    #[test]
    fn renders_starting_position() {
        let rendered = render(&Board::starting_position());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[1], "7  p p p p p p p p");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[6], "2  P P P P P P P P");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
