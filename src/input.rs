#![cfg(feature = "std")]

//! Player commands and where they come from.

use std::collections::VecDeque;
use std::fmt;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::board::GRID_SIZE;

/// Something the human asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire { row: usize, col: usize },
    Restart,
    Help,
    Quit,
}

/// Why a line of input was not understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    OffBoard(String),
    Unrecognized(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Enter a cell such as B7, or 'help'"),
            ParseError::OffBoard(s) => {
                write!(f, "{} is off the board (columns A-J, rows 1-10)", s)
            }
            ParseError::Unrecognized(s) => write!(f, "Don't know what '{}' means", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Format a cell the way it is typed: column letter, 1-based row.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// `B7` style coordinate.
fn parse_letter_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return Some((usize::MAX, col));
    }
    Some((row - 1, col))
}

/// `row col` pair, zero-based.
fn parse_numeric_coord(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == ',');
    let row = parts.next()?.trim().parse().ok()?;
    let col = parts.find(|p| !p.is_empty())?.trim().parse().ok()?;
    Some((row, col))
}

/// Parse one line typed by the player.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" | "new" | "start" => return Ok(Command::Restart),
        "h" | "?" | "help" => return Ok(Command::Help),
        _ => {}
    }
    let (row, col) = parse_letter_coord(line)
        .or_else(|| parse_numeric_coord(line))
        .ok_or_else(|| ParseError::Unrecognized(line.to_string()))?;
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return Err(ParseError::OffBoard(line.to_string()));
    }
    Ok(Command::Fire { row, col })
}

/// Source of player input lines.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Next raw line, or `None` once the source is exhausted.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Reads lines from the process's standard input.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}

/// Replays a fixed list of lines; used for demos and tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_coordinates() {
        assert_eq!(parse_command("A1"), Ok(Command::Fire { row: 0, col: 0 }));
        assert_eq!(parse_command(" b7 "), Ok(Command::Fire { row: 6, col: 1 }));
        assert_eq!(parse_command("J10"), Ok(Command::Fire { row: 9, col: 9 }));
    }

    #[test]
    fn parses_numeric_coordinates() {
        assert_eq!(parse_command("3 4"), Ok(Command::Fire { row: 3, col: 4 }));
        assert_eq!(parse_command("0,9"), Ok(Command::Fire { row: 0, col: 9 }));
    }

    #[test]
    fn rejects_off_board_cells() {
        assert!(matches!(parse_command("K1"), Err(ParseError::OffBoard(_))));
        assert!(matches!(parse_command("A11"), Err(ParseError::OffBoard(_))));
        assert!(matches!(parse_command("A0"), Err(ParseError::OffBoard(_))));
        assert!(matches!(parse_command("10 0"), Err(ParseError::OffBoard(_))));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert!(matches!(parse_command("fire!"), Err(ParseError::Unrecognized(_))));
    }

    #[test]
    fn coordinates_format_back() {
        assert_eq!(coord_to_string(6, 1), "B7");
        assert_eq!(coord_to_string(9, 9), "J10");
    }
}
