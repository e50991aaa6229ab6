//! Ship geometry: straight-line placements and the cells they occupy.

use crate::coord::Coordinate;

/// Axis a ship extends along from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// A class of ship in the fleet roster: display name and hull length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: u32,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: u32) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> u32 {
        self.length
    }
}

/// A straight ship anchored at `origin`, extending `length` cells along
/// `direction`. Immutable once placed; hit state lives in the board's shot
/// log, not on the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    direction: Direction,
    length: u32,
}

impl Ship {
    pub fn new(origin: Coordinate, direction: Direction, length: u32) -> Self {
        debug_assert!(length > 0);
        Self {
            origin,
            direction,
            length,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// The cells this ship occupies, in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let origin = self.origin;
        let direction = self.direction;
        (0..self.length as i32).map(move |i| match direction {
            Direction::Horizontal => origin.offset(i, 0),
            Direction::Vertical => origin.offset(0, i),
        })
    }

    /// True iff `target` is one of this ship's cells.
    pub fn occupies(&self, target: Coordinate) -> bool {
        self.cells().any(|cell| cell == target)
    }

    /// True iff any cell of `other` is also a cell of this ship.
    pub fn collides_with(&self, other: &Ship) -> bool {
        other.cells().any(|cell| self.occupies(cell))
    }
}
