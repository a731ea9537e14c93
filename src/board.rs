//! Game board: owns the ships and resolves attacks against them.

use core::fmt;
use std::collections::BTreeSet;

use rand::Rng;

use crate::common::{AttackOutcome, BoardError, Cell, Dimensions};
use crate::config::{FleetSpec, GameConfig};
use crate::factory::ShipFactory;
use crate::ship::Ship;

pub struct Board {
    dimensions: Dimensions,
    ships: Vec<Ship>,
    attacked: BTreeSet<Cell>,
}

impl Board {
    /// Create a board from explicit ships.
    ///
    /// Every ship must lie on the board and no two ships may touch.
    pub fn new(dimensions: Dimensions, ships: Vec<Ship>) -> Result<Self, BoardError> {
        for ship in &ships {
            if !dimensions.contains(ship.start()) || !dimensions.contains(ship.end()) {
                return Err(BoardError::ShipOutOfBounds {
                    start: ship.start(),
                    end: ship.end(),
                });
            }
        }
        for (i, a) in ships.iter().enumerate() {
            for (j, b) in ships.iter().enumerate().skip(i + 1) {
                if a.is_near_ship(b) || b.is_near_ship(a) {
                    return Err(BoardError::ShipsTooClose { first: i, second: j });
                }
            }
        }
        Ok(Board {
            dimensions,
            ships,
            attacked: BTreeSet::new(),
        })
    }

    /// Create a board with a randomly generated fleet.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        dimensions: Dimensions,
        fleet: &FleetSpec,
    ) -> Result<Self, BoardError> {
        let ships = ShipFactory::new(dimensions, fleet.clone()).generate_ships(rng)?;
        Board::new(dimensions, ships)
    }

    /// Random board for the given configuration.
    pub fn from_config<R: Rng + ?Sized>(
        rng: &mut R,
        config: &GameConfig,
    ) -> Result<Self, BoardError> {
        Board::random(rng, config.dimensions, &config.fleet)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Index of the ship occupying `cell`, if any.
    pub fn ship_at(&self, cell: Cell) -> Option<usize> {
        self.ships.iter().position(|s| s.occupies(cell))
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.has_sunk()).count()
    }

    pub fn is_attacked(&self, cell: Cell) -> bool {
        self.attacked.contains(&cell)
    }

    pub fn attacked_cells(&self) -> &BTreeSet<Cell> {
        &self.attacked
    }

    /// Resolve an attack on `cell`.
    ///
    /// Off-board cells and repeated attacks are rejected without touching any
    /// ship.
    pub fn receive_attack(&mut self, cell: Cell) -> Result<AttackOutcome, BoardError> {
        if !self.dimensions.contains(cell) {
            return Err(BoardError::CellOutOfBounds(cell));
        }
        if !self.attacked.insert(cell) {
            return Err(BoardError::AlreadyAttacked(cell));
        }
        for (i, ship) in self.ships.iter_mut().enumerate() {
            if ship.receive_damage(cell) {
                return Ok(AttackOutcome {
                    hit: true,
                    sunk: ship.has_sunk(),
                    ship: Some(i),
                });
            }
        }
        Ok(AttackOutcome::MISS)
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::has_sunk)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  dimensions: {}x{},\n  ships: {:?},\n  attacked: {:?}\n}}",
            self.dimensions.width, self.dimensions.height, self.ships, self.attacked
        )
    }
}
