use core::fmt;
use core::str::FromStr;

use crate::common::{BoardError, Dimensions};

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;

/// Default fleet: one ship of each length from 1 to 5, smallest first.
pub const DEFAULT_FLEET: [(usize, usize); 5] = [(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)];

/// Random start cells drawn per layout before the layout is abandoned.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Fresh layouts tried before the factory gives up.
pub const DEFAULT_MAX_LAYOUT_RESTARTS: usize = 50;

/// Ordered `length -> count` specification of a fleet.
///
/// Order matters: the factory places lengths in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetSpec {
    entries: Vec<(usize, usize)>,
}

impl FleetSpec {
    /// Build a fleet, rejecting zero lengths, zero counts and repeated lengths.
    pub fn new(entries: Vec<(usize, usize)>) -> Result<Self, BoardError> {
        if entries.is_empty() {
            return Err(BoardError::InvalidFleet("fleet is empty"));
        }
        for (i, &(length, count)) in entries.iter().enumerate() {
            if length == 0 {
                return Err(BoardError::InvalidFleet("ship length must be positive"));
            }
            if count == 0 {
                return Err(BoardError::InvalidFleet("ship count must be positive"));
            }
            if entries[..i].iter().any(|&(l, _)| l == length) {
                return Err(BoardError::InvalidFleet("ship length listed twice"));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    /// Number of ships of the given length, zero if absent.
    pub fn count_of(&self, length: usize) -> usize {
        self.entries
            .iter()
            .find(|&&(l, _)| l == length)
            .map_or(0, |&(_, c)| c)
    }

    pub fn total_ships(&self) -> usize {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    /// Total number of cells the fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.entries.iter().map(|&(l, c)| l * c).sum()
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self {
            entries: DEFAULT_FLEET.to_vec(),
        }
    }
}

impl fmt::Display for FleetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (length, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", length, count)?;
        }
        Ok(())
    }
}

impl FromStr for FleetSpec {
    type Err = BoardError;

    /// Parse `"1:1,2:1,5:2"` as `length:count` pairs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (length, count) = part
                .split_once(':')
                .ok_or(BoardError::InvalidFleet("expected length:count pairs"))?;
            let length = length
                .trim()
                .parse()
                .map_err(|_| BoardError::InvalidFleet("ship length is not a number"))?;
            let count = count
                .trim()
                .parse()
                .map_err(|_| BoardError::InvalidFleet("ship count is not a number"))?;
            entries.push((length, count));
        }
        FleetSpec::new(entries)
    }
}

/// Board size and fleet used for one side of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dimensions: Dimensions,
    pub fleet: FleetSpec,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::new(BOARD_WIDTH, BOARD_HEIGHT),
            fleet: FleetSpec::default(),
        }
    }
}
