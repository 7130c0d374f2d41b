#![cfg(feature = "std")]

//! Terminal rendering of a session.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::board::{BoardView, CellView, GRID_SIZE};
use crate::game::{GameEvent, GameSession, Side};

/// Output half of the presentation layer.
pub trait Presenter: Send {
    /// Redraw both boards.
    fn render(&mut self, session: &GameSession);

    /// Surface a sink or game-over notification.
    fn notify(&mut self, event: &GameEvent);

    /// Free-form feedback such as help text or an input error.
    fn message(&mut self, text: &str);
}

fn cell_char(cell: CellView) -> char {
    match cell {
        CellView::Unknown => '.',
        CellView::Ship => 'S',
        CellView::Hit => 'X',
        CellView::Miss => 'o',
    }
}

fn header(out: &mut String) {
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
}

/// Opponent waters on the left, own fleet on the right.
pub fn format_boards(target: &BoardView, own: &BoardView) -> String {
    let gap = "      ";
    let mut out = String::new();
    let _ = writeln!(out, "{:<23}{}{}", " Enemy waters", gap, " Your fleet");
    header(&mut out);
    out.push_str(gap);
    header(&mut out);
    out.push('\n');
    for r in 0..GRID_SIZE {
        for (i, view) in [target, own].into_iter().enumerate() {
            if i == 1 {
                out.push_str(gap);
            }
            let _ = write!(out, "{:2} ", r + 1);
            for c in 0..GRID_SIZE {
                let _ = write!(out, " {}", cell_char(view[r][c]));
            }
        }
        out.push('\n');
    }
    out
}

/// Text shown to the human for a notification.
pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::ShipSunk {
            owner: Side::Computer,
            ship,
        } => format!("You sunk the computer's {}!", ship),
        GameEvent::ShipSunk {
            owner: Side::Player,
            ship,
        } => format!("The computer sunk your {}!", ship),
        GameEvent::GameOver { winner } => format!("Game Over! {} wins!", winner),
    }
}

pub const HELP: &str = "Commands:
    <cell>     fire at a cell, e.g. B7 (columns A-J, rows 1-10)
    restart    start a new game with fresh fleets
    help       show this text
    quit       leave the game
Legend: S ship, X hit, o miss, . unknown";

/// Draws to stdout.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, session: &GameSession) {
        let target = session.board(Side::Computer).view(false);
        let own = session.board(Side::Player).view(true);
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\n{}", format_boards(&target, &own));
        let _ = stdout.flush();
    }

    fn notify(&mut self, event: &GameEvent) {
        println!(">> {}", describe_event(event));
    }

    fn message(&mut self, text: &str) {
        println!("{}", text);
    }
}
