//! Conversion between coordinate strings such as `"C7"` and grid cells.
//!
//! Letters name the column (`A` is x = 1) and the trailing number names the
//! row, so `"A1"` is the top-left cell.

use core::fmt;

use crate::common::{Cell, Dimensions};

/// Errors produced while reading or writing coordinate strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    MissingColumn(String),
    InvalidRow(String),
    OutOfBounds { cell: Cell, dimensions: Dimensions },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty input - enter a cell such as A5"),
            ParseError::MissingColumn(input) => {
                write!(f, "'{}' does not start with a column letter", input)
            }
            ParseError::InvalidRow(row) => write!(f, "Invalid row '{}' - must be a number", row),
            ParseError::OutOfBounds { cell, dimensions } => write!(
                f,
                "Cell {} is outside the {}x{} board",
                cell, dimensions.width, dimensions.height
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Converts coordinate strings to cells for a board of fixed dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellConverter {
    dimensions: Dimensions,
}

impl CellConverter {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Parse `"B10"` (case-insensitive) into `Cell { x: 2, y: 10 }`.
    pub fn parse(&self, input: &str) -> Result<Cell, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        let split = input
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(input.len());
        let (letters, digits) = input.split_at(split);
        if letters.is_empty() {
            return Err(ParseError::MissingColumn(input.to_string()));
        }

        // Bijective base-26 so columns past Z read as AA, AB, ...
        let x = letters
            .bytes()
            .map(|b| usize::from(b.to_ascii_uppercase() - b'A') + 1)
            .try_fold(0usize, |acc, d| acc.checked_mul(26)?.checked_add(d))
            .ok_or_else(|| ParseError::MissingColumn(input.to_string()))?;
        // Row is plain ASCII digits, no sign and no inner whitespace.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidRow(digits.to_string()));
        }
        let y: usize = digits
            .parse()
            .map_err(|_| ParseError::InvalidRow(digits.to_string()))?;

        let cell = Cell::new(x, y);
        if !self.dimensions.contains(cell) {
            return Err(ParseError::OutOfBounds {
                cell,
                dimensions: self.dimensions,
            });
        }
        Ok(cell)
    }

    /// Format a cell back into its coordinate string.
    pub fn format(&self, cell: Cell) -> Result<String, ParseError> {
        if !self.dimensions.contains(cell) {
            return Err(ParseError::OutOfBounds {
                cell,
                dimensions: self.dimensions,
            });
        }
        Ok(format!("{}{}", column_label(cell.x), cell.y))
    }
}

/// Column letters for a 1-indexed column: 1 -> `A`, 27 -> `AA`.
pub fn column_label(mut x: usize) -> String {
    let mut label = Vec::new();
    while x > 0 {
        let rem = (x - 1) % 26;
        label.push(b'A' + rem as u8);
        x = (x - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}
