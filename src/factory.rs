//! Random generation of legal, non-touching fleets.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::common::{BoardError, Cell, Dimensions, Direction};
use crate::config::{FleetSpec, DEFAULT_MAX_LAYOUT_RESTARTS, DEFAULT_MAX_PLACEMENT_ATTEMPTS};
use crate::convert::CellConverter;
use crate::ship::Ship;

/// Places a fleet at random so that no two ships touch, corners included.
#[derive(Debug, Clone)]
pub struct ShipFactory {
    dimensions: Dimensions,
    fleet: FleetSpec,
    max_attempts: usize,
    max_restarts: usize,
}

/// A layout run that ran out of room while placing a ship of `length`,
/// after drawing `attempts` start cells.
struct Stuck {
    length: usize,
    attempts: usize,
}

impl ShipFactory {
    pub fn new(dimensions: Dimensions, fleet: FleetSpec) -> Self {
        Self {
            dimensions,
            fleet,
            max_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            max_restarts: DEFAULT_MAX_LAYOUT_RESTARTS,
        }
    }

    /// Override the start draws allowed per layout and the number of layouts.
    pub fn with_limits(mut self, max_attempts: usize, max_restarts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.max_restarts = max_restarts.max(1);
        self
    }

    /// Build a ship from coordinate strings, e.g. `("A3", "C3")`.
    pub fn create_ship_from_str(
        start: &str,
        end: &str,
        dimensions: Dimensions,
    ) -> Result<Ship, BoardError> {
        let converter = CellConverter::new(dimensions);
        Ship::new(converter.parse(start)?, converter.parse(end)?)
    }

    /// Generate a full fleet.
    ///
    /// Fails with [`BoardError::PlacementExhausted`] once every layout run has
    /// got stuck. The reported attempts are the start draws actually made
    /// across all runs.
    pub fn generate_ships<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Ship>, BoardError> {
        let mut length = 0;
        let mut attempts = 0;
        for run in 0..self.max_restarts {
            match self.try_layout(rng) {
                Ok(ships) => return Ok(ships),
                Err(stuck) => {
                    log::debug!(
                        "layout {} stuck on a ship of length {}, restarting",
                        run + 1,
                        stuck.length
                    );
                    length = stuck.length;
                    attempts += stuck.attempts;
                }
            }
        }
        log::warn!(
            "giving up on fleet {} for a {}x{} board after {} attempts",
            self.fleet,
            self.dimensions.width,
            self.dimensions.height,
            attempts
        );
        Err(BoardError::PlacementExhausted { length, attempts })
    }

    fn try_layout<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Ship>, Stuck> {
        let entries = self.fleet.entries();
        let mut available: Vec<Cell> = self.dimensions.cells().collect();
        let mut retrieved = vec![0usize; entries.len()];
        let mut ships = Vec::with_capacity(self.fleet.total_ships());
        let mut attempts = 0;

        while let Some(slot) = next_slot(entries, &retrieved) {
            let length = entries[slot].0;
            if attempts == self.max_attempts {
                return Err(Stuck { length, attempts });
            }
            let Some(&start) = available.choose(rng) else {
                return Err(Stuck { length, attempts });
            };
            attempts += 1;
            if let Some(ship) = self.fit_from(rng, start, length, &available) {
                available.retain(|&c| !ship.is_near_cell(c));
                log::trace!("placed {}", ship);
                ships.push(ship);
                retrieved[slot] += 1;
            }
        }
        Ok(ships)
    }

    /// First ship of `length` from `start`, in shuffled direction order, whose
    /// cells are all still available.
    fn fit_from<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        start: Cell,
        length: usize,
        available: &[Cell],
    ) -> Option<Ship> {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        dirs.into_iter()
            .filter_map(|d| start.offset(d, length - 1))
            .filter(|&end| self.dimensions.contains(end))
            .filter_map(|end| Ship::new(start, end).ok())
            .find(|ship| ship.cells().iter().all(|c| available.contains(c)))
    }
}

/// Index of the first fleet entry whose count is not yet met.
fn next_slot(entries: &[(usize, usize)], retrieved: &[usize]) -> Option<usize> {
    entries
        .iter()
        .zip(retrieved)
        .position(|(&(_, wanted), &got)| got < wanted)
}
