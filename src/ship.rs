//! Ship types, per-ship hit tracking and the fleet that owns them.

use core::fmt;

use rand::Rng;

use crate::config::{NUM_SHIPS, SHIPS};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends to the right of its origin.
    Horizontal,
    /// Extends downward from its origin.
    Vertical,
}

impl Orientation {
    /// Coin-flip orientation.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// The `i`-th cell of a run starting at (row, col). May lie off the grid.
    pub fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship in a fleet. Tracks how many of its segments have been hit but not
/// where it sits on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hit_count: usize,
}

impl Ship {
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            hit_count: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_count == self.size()
    }

    /// Record one more hit. Returns `false` without changing anything if the
    /// ship is already sunk.
    pub fn register_hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hit_count += 1;
        true
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.name(), self.hit_count, self.size())
    }
}

/// The five ships owned by one side, in configuration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
}

impl Fleet {
    /// A fresh fleet with no hits.
    pub fn new() -> Self {
        Self {
            ships: core::array::from_fn(|i| Ship::new(SHIPS[i])),
        }
    }

    /// Build a fleet from explicit ship records, mostly useful for setting up
    /// mid-game positions.
    pub fn from_ships(ships: [Ship; NUM_SHIPS]) -> Self {
        Self { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Credit a hit to the first ship, in fleet order, that is still afloat.
    ///
    /// The ship actually occupying the shot cell is not consulted; hits fill
    /// ships up in order. Returns the credited ship, or `None` if the whole
    /// fleet is already sunk.
    pub fn attribute_hit(&mut self) -> Option<&Ship> {
        let ship = self.ships.iter_mut().find(|s| !s.is_sunk())?;
        ship.register_hit();
        Some(&*ship)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
