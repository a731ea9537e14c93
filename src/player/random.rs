use std::collections::HashSet;

use anyhow::bail;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{Cell, Dimensions};

use super::Player;

/// Player that fires uniformly at random, never at the same cell twice.
pub struct RandomPlayer {
    name: String,
    board: Board,
    target: Dimensions,
    tracker: HashSet<Cell>,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        let target = board.dimensions();
        Self {
            name: name.into(),
            board,
            target,
            tracker: HashSet::new(),
        }
    }

    pub fn with_target(mut self, target: Dimensions) -> Self {
        self.target = target;
        self.tracker.clear();
        self
    }

    /// Cells already fired at.
    pub fn tracker(&self) -> &HashSet<Cell> {
        &self.tracker
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Cell> {
        if self.tracker.len() >= self.target.cell_count() {
            bail!("{}: every cell has already been targeted", self.name);
        }
        loop {
            let cell = Cell::new(
                rng.random_range(1..=self.target.width),
                rng.random_range(1..=self.target.height),
            );
            if self.tracker.insert(cell) {
                return Ok(cell);
            }
        }
    }
}
