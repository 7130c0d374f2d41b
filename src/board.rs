//! One player's 10×10 grid: ship segments, hits and misses.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

pub(crate) const GRID_SIZE: usize = BOARD_SIZE as usize;

type BB = BitBoard<u128, GRID_SIZE>;

/// What a display layer is allowed to see of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Not shot yet, and either water or a ship hidden from the viewer.
    Unknown,
    /// Unshot ship segment, only shown to the board's owner.
    Ship,
    Hit,
    Miss,
}

/// Render-ready snapshot of a board.
pub type BoardView = [[CellView; GRID_SIZE]; GRID_SIZE];

/// Board layers. A cell is `Hit` or `Miss` once it appears in the matching
/// mask; `hits` is always a subset of `ship_map` and `misses` is disjoint
/// from it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create an empty board (every cell `Empty`).
    pub fn new() -> Self {
        let empty = BB::new();
        Board {
            ship_map: empty,
            hits: empty,
            misses: empty,
        }
    }

    /// State of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(if self.hits.get(row, col)? {
            Cell::Hit
        } else if self.misses.get(row, col)? {
            Cell::Miss
        } else if self.ship_map.get(row, col)? {
            Cell::ShipPresent
        } else {
            Cell::Empty
        })
    }

    /// `true` once (row, col) has been shot at.
    pub fn is_resolved(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell(row, col)?.is_resolved())
    }

    /// Whether a ship of `size` starting at (row, col) would lie fully on the
    /// grid and only cover `Empty` cells. Off-grid origins return `false`.
    pub fn can_place_ship(
        &self,
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
    ) -> bool {
        (0..size).all(|i| {
            let (r, c) = orientation.step(row, col, i);
            matches!(self.cell(r, c), Ok(Cell::Empty))
        })
    }

    /// Mark `size` cells from (row, col) as `ShipPresent`.
    ///
    /// Overlap is not checked; callers run [`Board::can_place_ship`] first.
    /// Cells that fall off the grid are still rejected, leaving the board
    /// untouched.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let mask = BB::from_cells((0..size).map(|i| orientation.step(row, col, i)))?;
        debug_assert!(
            self.ship_map.is_disjoint(&mask),
            "place_ship called on an overlapping position"
        );
        self.ship_map = self.ship_map | mask;
        log::trace!("placed {size}-cell ship at ({row}, {col}) {orientation:?}");
        Ok(())
    }

    /// Fire at (row, col). Repeat shots report `AlreadyTaken` and change
    /// nothing.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        match self.cell(row, col)? {
            Cell::Hit | Cell::Miss => Ok(ShotOutcome::AlreadyTaken),
            Cell::ShipPresent => {
                self.hits.set(row, col)?;
                Ok(ShotOutcome::Hit)
            }
            Cell::Empty => {
                self.misses.set(row, col)?;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    pub fn ship_cell_count(&self) -> usize {
        self.ship_map.count_ones()
    }

    /// Cells that have not been shot at yet.
    pub fn unresolved_count(&self) -> usize {
        BB::CELLS - (self.hits | self.misses).count_ones()
    }

    /// Per-cell view for rendering. Unshot ship segments are only shown when
    /// `reveal_ships` is set.
    pub fn view(&self, reveal_ships: bool) -> BoardView {
        let mut view = [[CellView::Unknown; GRID_SIZE]; GRID_SIZE];
        for (r, row) in view.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = match self.cell(r, c) {
                    Ok(Cell::Hit) => CellView::Hit,
                    Ok(Cell::Miss) => CellView::Miss,
                    Ok(Cell::ShipPresent) if reveal_ships => CellView::Ship,
                    _ => CellView::Unknown,
                };
            }
        }
        view
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.view(true).iter() {
            for cell in row.iter() {
                let ch = match cell {
                    CellView::Unknown => '.',
                    CellView::Ship => 'S',
                    CellView::Hit => 'X',
                    CellView::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
