//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AutomaticPlayer: hunt-and-target heuristic
//! - RandomPlayer: uniform shots at cells it has not tried yet
//! - ManualPlayer: reads coordinates from a text stream

use rand::rngs::SmallRng;
use serde::Serialize;

use crate::board::Board;
use crate::common::Cell;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Owning the board its opponent attacks
/// - Selecting targets on the opponent's grid
/// - Handling feedback from its own shots
pub trait Player {
    fn name(&self) -> &str;

    /// The player's own board.
    fn board(&self) -> &Board;

    fn board_mut(&mut self) -> &mut Board;

    /// Choose the next cell to attack.
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Cell>;

    /// Inform the player of the result of its last shot.
    fn receive_result(&mut self, _is_ship_hit: bool, _has_ship_sunk: bool) {}

    /// True once every ship on the player's own board has sunk.
    fn has_lost(&self) -> bool {
        self.board().all_ships_sunk()
    }
}

/// Outcome of a shot as reported back to the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShotOutcome {
    pub hit: bool,
    pub sunk: bool,
}

impl ShotOutcome {
    pub const fn new(hit: bool, sunk: bool) -> Self {
        Self { hit, sunk }
    }
}

/// Hands out default player names (`Player 1`, `Player 2`, ...).
///
/// Every name request advances the counter, explicit names included.
#[derive(Debug, Default)]
pub struct PlayerNamer {
    count: usize,
}

impl PlayerNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player, returning `explicit` or the next default name.
    pub fn name(&mut self, explicit: Option<&str>) -> String {
        self.count += 1;
        match explicit {
            Some(name) => name.to_string(),
            None => format!("Player {}", self.count),
        }
    }

    /// Number of players registered since the last reset.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

pub mod automatic;
pub use automatic::AutomaticPlayer;

pub mod manual;
pub use manual::ManualPlayer;

pub mod random;
pub use random::RandomPlayer;
