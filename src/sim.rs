#![cfg(feature = "std")]

//! Headless random-vs-random games.

use serde::Serialize;

use crate::common::BoardError;
use crate::controller::make_rng;
use crate::game::{GameSession, Side};
use crate::opponent::{RandomOpponent, TargetPolicy};

/// Result of one simulated game.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameSummary {
    pub seed: Option<u64>,
    pub winner: Side,
    pub player_shots: usize,
    pub computer_shots: usize,
    pub player_ships_afloat: usize,
    pub computer_ships_afloat: usize,
}

/// Play a whole game where the human side also fires at random.
pub fn simulate(seed: Option<u64>) -> Result<GameSummary, BoardError> {
    let mut rng = make_rng(seed);
    let mut session = GameSession::new(&mut rng, None)?;
    let mut player = RandomOpponent::new();
    let mut computer = RandomOpponent::new();

    let winner = loop {
        let view = session.board(Side::Computer).view(false);
        let (row, col) = player.select_target(&mut rng, &view)?;
        session.handle_player_move(row, col)?;
        session.computer_move(&mut computer, &mut rng)?;
        if let Some(winner) = session.winner() {
            break winner;
        }
    };

    let summary = GameSummary {
        seed,
        winner,
        player_shots: session.shots_fired(Side::Player),
        computer_shots: session.shots_fired(Side::Computer),
        player_ships_afloat: session.fleet(Side::Player).afloat(),
        computer_ships_afloat: session.fleet(Side::Computer).afloat(),
    };
    log::info!(
        "simulated game: {} wins after {} + {} shots",
        summary.winner,
        summary.player_shots,
        summary.computer_shots
    );
    Ok(summary)
}
