//! Ship geometry and damage tracking.

use core::fmt;
use std::collections::BTreeSet;

use crate::common::{within_margin, BoardError, Cell, Direction};

/// A straight run of cells on the board.
///
/// Endpoints are normalised on construction so that `start` is the top-left
/// end. Geometry never changes afterwards; only the damaged set grows.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    start: Cell,
    end: Cell,
    cells: Vec<Cell>,
    damaged: BTreeSet<Cell>,
}

impl Ship {
    /// Create a ship spanning `start` to `end`, in either order.
    pub fn new(start: Cell, end: Cell) -> Result<Self, BoardError> {
        let lo = Cell::new(start.x.min(end.x), start.y.min(end.y));
        let hi = Cell::new(start.x.max(end.x), start.y.max(end.y));
        if lo.x != hi.x && lo.y != hi.y {
            return Err(BoardError::InvalidGeometry { start, end });
        }

        let length = (hi.x - lo.x).max(hi.y - lo.y) + 1;
        let dir = if lo.y == hi.y {
            Direction::Right
        } else {
            Direction::Down
        };
        let cells = (0..length)
            .filter_map(|i| lo.offset(dir, i))
            .collect();

        Ok(Ship {
            start: lo,
            end: hi,
            cells,
            damaged: BTreeSet::new(),
        })
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    /// A single-cell ship is both horizontal and vertical.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells from `start` to `end`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Record an attack on `cell`. Returns `true` if the ship was hit.
    pub fn receive_damage(&mut self, cell: Cell) -> bool {
        if self.occupies(cell) {
            self.damaged.insert(cell);
            true
        } else {
            false
        }
    }

    pub fn damaged_cells(&self) -> &BTreeSet<Cell> {
        &self.damaged
    }

    pub fn damage_count(&self) -> usize {
        self.damaged.len()
    }

    pub fn has_sunk(&self) -> bool {
        self.damaged.len() == self.cells.len()
    }

    /// Whether `cell` is on the ship or touches it, corners included.
    pub fn is_near_cell(&self, cell: Cell) -> bool {
        within_margin(cell, self.start, self.end)
    }

    /// Whether any cell of `other` is near this ship.
    pub fn is_near_ship(&self, other: &Ship) -> bool {
        other.cells.iter().any(|&c| self.is_near_cell(c))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {}, end: {}, length: {}, hits: {} }}",
            self.start,
            self.end,
            self.length(),
            self.damaged.len(),
        )
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship(start=({},{}), end=({},{}))",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
