//! Random fleet placement by rejection sampling.

use rand::Rng;

use crate::board::{Board, GRID_SIZE};
use crate::common::BoardError;
use crate::config::{NUM_SHIPS, SHIPS};
use crate::ship::{Fleet, Orientation, ShipType};

/// Where one ship ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ship: ShipType,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// Cells covered by the ship, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            ship,
            row,
            col,
            orientation,
        } = *self;
        (0..ship.length()).map(move |i| orientation.step(row, col, i))
    }
}

/// Sample origins and orientations uniformly until `ship_type` fits on
/// `board`.
///
/// Origins are drawn from the whole grid, so samples that run off the edge
/// are rejected like overlapping ones. With `max_attempts = None` this loops
/// until a position is found.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    ship_type: ShipType,
    max_attempts: Option<u32>,
) -> Result<Placement, BoardError> {
    let mut attempts: u32 = 0;
    loop {
        if max_attempts.is_some_and(|cap| attempts >= cap) {
            log::warn!(
                "giving up on {} after {} attempts",
                ship_type.name(),
                attempts
            );
            return Err(BoardError::PlacementExhausted {
                ship: ship_type.name(),
            });
        }
        attempts += 1;
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        let orientation = Orientation::random(rng);
        if board.can_place_ship(row, col, ship_type.length(), orientation) {
            log::trace!(
                "{} fits at ({}, {}) {:?} after {} samples",
                ship_type.name(),
                row,
                col,
                orientation,
                attempts
            );
            return Ok(Placement {
                ship: ship_type,
                row,
                col,
                orientation,
            });
        }
        log::trace!(
            "{} rejected at ({}, {}) {:?}",
            ship_type.name(),
            row,
            col,
            orientation
        );
    }
}

/// Place every configured ship on `board`, in fleet order, and report where
/// each one went.
pub fn random_layout<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    max_attempts: Option<u32>,
) -> Result<[Placement; NUM_SHIPS], BoardError> {
    let mut layout = [Placement {
        ship: SHIPS[0],
        row: 0,
        col: 0,
        orientation: Orientation::Horizontal,
    }; NUM_SHIPS];
    for (slot, def) in layout.iter_mut().zip(SHIPS.iter()) {
        let placement = random_placement(board, rng, *def, max_attempts)?;
        board.place_ship(
            placement.row,
            placement.col,
            def.length(),
            placement.orientation,
        )?;
        *slot = placement;
    }
    log::debug!("fleet placed: {} ship cells", board.ship_cell_count());
    Ok(layout)
}

/// Place the whole fleet and return its fresh ship records.
pub fn place_ships_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    max_attempts: Option<u32>,
) -> Result<Fleet, BoardError> {
    random_layout(board, rng, max_attempts)?;
    Ok(Fleet::new())
}
