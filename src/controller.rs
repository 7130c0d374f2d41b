#![cfg(feature = "std")]

//! Drives a session from player commands: applies the human's shot, waits
//! out the pacing delay, lets the computer reply and keeps the presenter in
//! sync.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::ShotOutcome;
use crate::config::GameConfig;
use crate::game::{GameSession, MoveReport, Side, TurnPhase};
use crate::input::{coord_to_string, parse_command, Command, InputSource};
use crate::opponent::{RandomOpponent, TargetPolicy};
use crate::ui::{describe_event, Presenter, HELP};

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Seeded RNG when `seed` is set, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn describe_shot(report: &MoveReport) -> String {
    let cell = coord_to_string(report.row, report.col);
    let result = match report.outcome {
        ShotOutcome::Hit => "hit",
        ShotOutcome::Miss => "miss",
        ShotOutcome::AlreadyTaken => "already taken",
    };
    match report.shooter {
        Side::Player => format!("You fire at {}: {}.", cell, result),
        Side::Computer => format!("Computer fires at {}: {}.", cell, result),
    }
}

/// Owns the session and everything needed to advance it.
pub struct GameController<P: Presenter> {
    session: GameSession,
    presenter: P,
    opponent: Box<dyn TargetPolicy + Send>,
    rng: SmallRng,
    config: GameConfig,
}

impl<P: Presenter> GameController<P> {
    /// Start a game and draw the opening position.
    pub fn new(config: GameConfig, presenter: P) -> anyhow::Result<Self> {
        let mut rng = make_rng(config.seed);
        let session = GameSession::new(&mut rng, config.max_placement_attempts)
            .map_err(|e| anyhow::anyhow!(e))?;
        let mut controller = Self {
            session,
            presenter,
            opponent: Box::new(RandomOpponent::new()),
            rng,
            config,
        };
        controller.presenter.render(&controller.session);
        Ok(controller)
    }

    /// Swap the computer's targeting policy.
    pub fn with_policy(mut self, policy: Box<dyn TargetPolicy + Send>) -> Self {
        self.opponent = policy;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Throw the current game away and deal fresh fleets.
    pub fn restart(&mut self) -> anyhow::Result<()> {
        self.session = GameSession::new(&mut self.rng, self.config.max_placement_attempts)
            .map_err(|e| anyhow::anyhow!(e))?;
        log::info!("game restarted");
        self.presenter.message("New game. Fleets are in position.");
        self.presenter.render(&self.session);
        Ok(())
    }

    /// The human picked a cell on the enemy board.
    ///
    /// Runs the computer's reply before returning, so no other command is
    /// processed while it is pending.
    pub async fn select_cell(
        &mut self,
        row: usize,
        col: usize,
    ) -> anyhow::Result<Option<MoveReport>> {
        let report = match self
            .session
            .handle_player_move(row, col)
            .map_err(|e| anyhow::anyhow!(e))?
        {
            Some(report) => report,
            None => {
                if self.session.is_over() {
                    self.presenter
                        .message("The game is over. Type 'restart' for a new one.");
                }
                return Ok(None);
            }
        };
        if report.outcome == ShotOutcome::AlreadyTaken {
            self.presenter.message(&format!(
                "You already fired at {}.",
                coord_to_string(row, col)
            ));
            return Ok(Some(report));
        }
        self.publish(&report);

        if self.session.phase() == TurnPhase::AwaitingComputerMove {
            if !self.config.computer_delay.is_zero() {
                tokio::time::sleep(self.config.computer_delay).await;
            }
            self.computer_turn()?;
        }
        Ok(Some(report))
    }

    fn computer_turn(&mut self) -> anyhow::Result<()> {
        let reply = self
            .session
            .computer_move(self.opponent.as_mut(), &mut self.rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        if let Some(report) = reply {
            self.publish(&report);
        }
        Ok(())
    }

    fn publish(&mut self, report: &MoveReport) {
        self.presenter.render(&self.session);
        self.presenter.message(&describe_shot(report));
        for event in report.events() {
            log::debug!("{}", describe_event(&event));
            self.presenter.notify(&event);
        }
    }

    /// Apply one parsed command.
    pub async fn handle(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Fire { row, col } => {
                self.select_cell(row, col).await?;
            }
            Command::Restart => self.restart()?,
            Command::Help => self.presenter.message(HELP),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Read commands until the input runs dry or the player quits.
    pub async fn run(&mut self, input: &mut dyn InputSource) -> anyhow::Result<()> {
        self.presenter
            .message("Fire by typing a cell such as B7. Type 'help' for commands.");
        while let Some(line) = input.next_line().await? {
            match parse_command(&line) {
                Ok(command) => {
                    if self.handle(command).await? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => self.presenter.message(&e.to_string()),
            }
        }
        Ok(())
    }
}
