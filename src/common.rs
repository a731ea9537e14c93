//! Common types for the game: cells, directions, board dimensions, attack
//! outcomes and board errors.

use core::fmt;
use serde::Serialize;

use crate::convert::ParseError;

/// A 1-indexed `(x, y)` grid position. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`, or `None` below index zero.
    pub fn step(self, dir: Direction) -> Option<Cell> {
        self.offset(dir, 1)
    }

    /// The cell `n` steps away in `dir`.
    pub fn offset(self, dir: Direction, n: usize) -> Option<Cell> {
        let (dx, dy) = dir.delta();
        let n = isize::try_from(n).ok()?;
        let x = self.x.checked_add_signed(dx.checked_mul(n)?)?;
        let y = self.y.checked_add_signed(dy.checked_mul(n)?)?;
        Some(Cell { x, y })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Unit vector of the step; `y` grows downwards.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// The direction leading from `from` to the orthogonally adjacent `to`.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| from.step(d) == Some(to))
    }
}

/// Width and height of a rectangular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Whether `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.x) && (1..=self.height).contains(&cell.y)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Every cell of the board, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let height = self.height;
        (1..=self.width).flat_map(move |x| (1..=height).map(move |y| Cell::new(x, y)))
    }

    /// The opening target: `(width / 2 + 1, height / 2 + 1)`.
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2 + 1, self.height / 2 + 1)
    }
}

/// True when `cell` is inside the box `lo..=hi` grown by one cell on every side.
pub fn within_margin(cell: Cell, lo: Cell, hi: Cell) -> bool {
    cell.x + 1 >= lo.x && cell.x <= hi.x + 1 && cell.y + 1 >= lo.y && cell.y <= hi.y + 1
}

/// Result of an attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackOutcome {
    pub hit: bool,
    pub sunk: bool,
    /// Index of the ship that was struck, if any.
    pub ship: Option<usize>,
}

impl AttackOutcome {
    pub const MISS: AttackOutcome = AttackOutcome {
        hit: false,
        sunk: false,
        ship: None,
    };
}

/// Errors returned by ship, factory and board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship endpoints are neither in one row nor in one column.
    InvalidGeometry { start: Cell, end: Cell },
    /// The factory could not fit the fleet within its attempt budget.
    PlacementExhausted { length: usize, attempts: usize },
    /// Fleet specification is malformed.
    InvalidFleet(&'static str),
    /// A ship extends past the board edge.
    ShipOutOfBounds { start: Cell, end: Cell },
    /// Two ships overlap or touch.
    ShipsTooClose { first: usize, second: usize },
    /// The attacked cell is off the board.
    CellOutOfBounds(Cell),
    /// The cell was already attacked.
    AlreadyAttacked(Cell),
    /// A coordinate string could not be read.
    Parse(ParseError),
}

impl From<ParseError> for BoardError {
    fn from(err: ParseError) -> Self {
        BoardError::Parse(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidGeometry { start, end } => write!(
                f,
                "Invalid ship {} -> {}: a ship must be either horizontal or vertical",
                start, end
            ),
            BoardError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place a ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::InvalidFleet(reason) => write!(f, "Invalid fleet: {}", reason),
            BoardError::ShipOutOfBounds { start, end } => {
                write!(f, "Ship {} -> {} is out of bounds", start, end)
            }
            BoardError::ShipsTooClose { first, second } => {
                write!(f, "Ships {} and {} overlap or touch", first, second)
            }
            BoardError::CellOutOfBounds(cell) => write!(f, "Cell {} is off the board", cell),
            BoardError::AlreadyAttacked(cell) => {
                write!(f, "Cell {} was already attacked", cell)
            }
            BoardError::Parse(e) => write!(f, "Coordinate error: {}", e),
        }
    }
}

impl std::error::Error for BoardError {}
