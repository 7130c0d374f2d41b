use core::time::Duration;

use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Pause between the player's shot and the computer's reply.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Runtime settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Delay before the computer answers a player shot.
    pub computer_delay: Duration,
    /// Cap on rejected samples per ship during random placement.
    /// `None` retries until a position is found.
    pub max_placement_attempts: Option<u32>,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = Some(attempts);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            computer_delay: DEFAULT_COMPUTER_DELAY,
            max_placement_attempts: None,
        }
    }
}
