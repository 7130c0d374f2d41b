use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{BoardView, CellView, GRID_SIZE};
use crate::common::BoardError;

/// Chooses where a side fires next.
///
/// Policies only get the shooter's view of the target board: hits and
/// misses, never unshot ship segments.
pub trait TargetPolicy {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &BoardView,
    ) -> Result<(usize, usize), BoardError>;
}

/// Fires at a uniformly random cell that has not been shot yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl TargetPolicy for RandomOpponent {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &BoardView,
    ) -> Result<(usize, usize), BoardError> {
        let is_open = |cell: &CellView| !matches!(cell, CellView::Hit | CellView::Miss);
        if !target.iter().flatten().any(|cell| is_open(cell)) {
            return Err(BoardError::NoTargetsLeft);
        }
        loop {
            let r = rng.random_range(0..GRID_SIZE);
            let c = rng.random_range(0..GRID_SIZE);
            if is_open(&target[r][c]) {
                return Ok((r, c));
            }
        }
    }
}
