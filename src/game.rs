//! Turn resolution for a human-vs-computer session.

use core::fmt;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::opponent::TargetPolicy;
use crate::placement::place_ships_randomly;
use crate::ship::Fleet;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Side::Player => "Player",
            Side::Computer => "Computer",
        })
    }
}

/// Where the session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingPlayerMove,
    AwaitingComputerMove,
    GameOver { winner: Side },
}

/// Notifications for whatever presentation layer is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `owner` lost the named ship.
    ShipSunk { owner: Side, ship: &'static str },
    GameOver { winner: Side },
}

/// Everything that happened as a result of one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub shooter: Side,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    /// Ship that this shot finished off.
    pub sunk: Option<&'static str>,
    /// Set when this shot ended the game.
    pub winner: Option<Side>,
}

impl MoveReport {
    /// Notifications raised by this shot, sink before game over.
    pub fn events(&self) -> impl Iterator<Item = GameEvent> {
        let owner = self.shooter.opponent();
        let sunk = self.sunk.map(|ship| GameEvent::ShipSunk { owner, ship });
        let over = self.winner.map(|winner| GameEvent::GameOver { winner });
        sunk.into_iter().chain(over)
    }
}

/// Winner for a pair of fleet states. A lost player fleet takes precedence,
/// so a simultaneous wipe-out goes to the computer.
pub fn decide_winner(player_fleet_sunk: bool, computer_fleet_sunk: bool) -> Option<Side> {
    if player_fleet_sunk {
        Some(Side::Computer)
    } else if computer_fleet_sunk {
        Some(Side::Player)
    } else {
        None
    }
}

/// Both boards and fleets plus whose turn it is.
#[derive(Debug, Clone)]
pub struct GameSession {
    player_board: Board,
    computer_board: Board,
    player_fleet: Fleet,
    computer_fleet: Fleet,
    phase: TurnPhase,
    shots: [usize; 2],
}

impl GameSession {
    /// Start a game: two empty boards, each with a randomly placed fleet.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        max_placement_attempts: Option<u32>,
    ) -> Result<Self, BoardError> {
        let mut player_board = Board::new();
        let mut computer_board = Board::new();
        let player_fleet = place_ships_randomly(&mut player_board, rng, max_placement_attempts)?;
        let computer_fleet =
            place_ships_randomly(&mut computer_board, rng, max_placement_attempts)?;
        log::debug!("new session started");
        Ok(Self::from_parts(
            player_board,
            player_fleet,
            computer_board,
            computer_fleet,
        ))
    }

    /// Assemble a session from prepared boards and fleets, player to move.
    pub fn from_parts(
        player_board: Board,
        player_fleet: Fleet,
        computer_board: Board,
        computer_fleet: Fleet,
    ) -> Self {
        Self {
            player_board,
            computer_board,
            player_fleet,
            computer_fleet,
            phase: TurnPhase::AwaitingPlayerMove,
            shots: [0; 2],
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// The board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Computer => &self.computer_board,
        }
    }

    /// The fleet belonging to `side`.
    pub fn fleet(&self, side: Side) -> &Fleet {
        match side {
            Side::Player => &self.player_fleet,
            Side::Computer => &self.computer_fleet,
        }
    }

    /// Shots `side` has landed on fresh cells so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Apply the human's shot at (row, col) on the computer's board.
    ///
    /// Returns `Ok(None)` when player input is not accepted right now (game
    /// over, or the computer still has to reply). A shot at an already
    /// resolved cell comes back as `AlreadyTaken` and keeps the turn with the
    /// player.
    pub fn handle_player_move(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<MoveReport>, BoardError> {
        if self.phase != TurnPhase::AwaitingPlayerMove {
            log::debug!("ignoring player shot at ({row}, {col}) in {:?}", self.phase);
            return Ok(None);
        }
        let report = self.fire(Side::Player, row, col)?;
        if report.outcome != ShotOutcome::AlreadyTaken && !self.is_over() {
            self.phase = TurnPhase::AwaitingComputerMove;
        }
        Ok(Some(report))
    }

    /// Let the computer fire once at the human's board, using `policy` to
    /// pick the cell. Does nothing once the game is over.
    pub fn computer_move(
        &mut self,
        policy: &mut dyn TargetPolicy,
        rng: &mut SmallRng,
    ) -> Result<Option<MoveReport>, BoardError> {
        if self.is_over() {
            return Ok(None);
        }
        let view = self.player_board.view(false);
        let (row, col) = policy.select_target(rng, &view)?;
        let report = self.fire(Side::Computer, row, col)?;
        if !self.is_over() {
            self.phase = TurnPhase::AwaitingPlayerMove;
        }
        Ok(Some(report))
    }

    /// Enter `GameOver` if either fleet is gone and return the winner.
    pub fn check_game_over(&mut self) -> Option<Side> {
        if let TurnPhase::GameOver { winner } = self.phase {
            return Some(winner);
        }
        let winner = decide_winner(self.player_fleet.all_sunk(), self.computer_fleet.all_sunk())?;
        self.phase = TurnPhase::GameOver { winner };
        log::info!(
            "game over after {} player / {} computer shots: {} wins",
            self.shots_fired(Side::Player),
            self.shots_fired(Side::Computer),
            winner
        );
        Some(winner)
    }

    fn fire(&mut self, shooter: Side, row: usize, col: usize) -> Result<MoveReport, BoardError> {
        let (board, fleet) = match shooter {
            Side::Player => (&mut self.computer_board, &mut self.computer_fleet),
            Side::Computer => (&mut self.player_board, &mut self.player_fleet),
        };
        let outcome = board.resolve_shot(row, col)?;
        let mut report = MoveReport {
            shooter,
            row,
            col,
            outcome,
            sunk: None,
            winner: None,
        };
        match outcome {
            ShotOutcome::AlreadyTaken => return Ok(report),
            ShotOutcome::Hit => {
                if let Some(ship) = fleet.attribute_hit() {
                    if ship.is_sunk() {
                        report.sunk = Some(ship.name());
                    }
                }
            }
            ShotOutcome::Miss => {}
        }
        self.shots[shooter.index()] += 1;
        log::debug!("{shooter} fired at ({row}, {col}): {outcome:?}");
        report.winner = self.check_game_over();
        Ok(report)
    }
}
