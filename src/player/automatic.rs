// Hunt-and-target guessing logic for the opponent board.
//
// The player fires at random until it hits something, then probes along the
// four axis directions from that first hit. Once a direction confirms a second
// hit it keeps walking that way, reversing back through the first hit when the
// line runs out. A sunk ship rules out its whole neighbourhood, since ships
// never touch.

use anyhow::anyhow;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::common::{within_margin, Cell, Dimensions, Direction};

use super::{Player, ShotOutcome};

/// Player driven by the hunt-and-target heuristic.
pub struct AutomaticPlayer {
    name: String,
    board: Board,
    target: Dimensions,
    /// Shots in the order they were fired, with their reported outcome.
    shots: Vec<(Cell, ShotOutcome)>,
    prev_move: Option<Cell>,
    /// Cells still worth shooting at. Only ever shrinks.
    available: Vec<Cell>,
    /// Hits on the ship currently being hunted, first hit first.
    hunt: Vec<Cell>,
    step: Option<Direction>,
    tried: Vec<Direction>,
}

impl AutomaticPlayer {
    /// Create a player whose opponent's grid has the same size as `board`.
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        let target = board.dimensions();
        Self {
            name: name.into(),
            board,
            target,
            shots: Vec::new(),
            prev_move: None,
            available: target.cells().collect(),
            hunt: Vec::new(),
            step: None,
            tried: Vec::new(),
        }
    }

    /// Aim at an opponent grid of a different size. Clears all tracking state.
    pub fn with_target(self, target: Dimensions) -> Self {
        Self {
            target,
            available: target.cells().collect(),
            shots: Vec::new(),
            prev_move: None,
            hunt: Vec::new(),
            step: None,
            tried: Vec::new(),
            ..self
        }
    }

    /// Every shot fired so far, in order, with its outcome.
    pub fn shots(&self) -> &[(Cell, ShotOutcome)] {
        &self.shots
    }

    /// Every cell fired at so far, in order.
    pub fn all_moves(&self) -> Vec<Cell> {
        self.shots.iter().map(|&(cell, _)| cell).collect()
    }

    pub fn previous_move(&self) -> Option<Cell> {
        self.prev_move
    }

    pub fn available_cells(&self) -> &[Cell] {
        &self.available
    }

    /// Hits on the ship currently being hunted.
    pub fn hunted_cells(&self) -> &[Cell] {
        &self.hunt
    }

    fn outcome_of(&self, cell: Cell) -> Option<ShotOutcome> {
        self.shots
            .iter()
            .rev()
            .find(|&&(c, _)| c == cell)
            .map(|&(_, outcome)| outcome)
    }

    /// Whether stepping from `from` in `dir` lands on an available cell.
    fn is_legal(&self, from: Cell, dir: Direction) -> bool {
        from.step(dir)
            .is_some_and(|cell| self.available.contains(&cell))
    }

    fn random_available(&self, rng: &mut SmallRng) -> Option<Cell> {
        self.available.choose(rng).copied()
    }

    fn reset_hunt(&mut self) {
        self.hunt.clear();
        self.step = None;
        self.tried.clear();
    }

    /// Previous shot hit a ship that is still afloat.
    fn follow_hit(&mut self, hit: Cell, rng: &mut SmallRng) -> Option<Cell> {
        self.hunt.push(hit);

        if self.hunt.len() == 1 {
            let legal: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| self.is_legal(hit, d))
                .collect();
            let dir = *legal.choose(rng)?;
            self.step = Some(dir);
            return hit.step(dir);
        }

        let mut step = self.step?;
        let mut from = hit;
        if !self.is_legal(hit, step) {
            // ran into the edge or a ruled-out cell before the ship sank
            step = step.reversed();
            from = self.hunt[0];
        }
        self.step = Some(step);
        from.step(step)
    }

    /// Previous shot sank the hunted ship.
    fn finish_ship(&mut self, hit: Cell, rng: &mut SmallRng) -> Option<Cell> {
        self.hunt.push(hit);

        let lo = Cell::new(
            self.hunt.iter().map(|c| c.x).min().unwrap_or(hit.x),
            self.hunt.iter().map(|c| c.y).min().unwrap_or(hit.y),
        );
        let hi = Cell::new(
            self.hunt.iter().map(|c| c.x).max().unwrap_or(hit.x),
            self.hunt.iter().map(|c| c.y).max().unwrap_or(hit.y),
        );
        let before = self.available.len();
        self.available.retain(|&c| !within_margin(c, lo, hi));
        log::trace!(
            "{}: sank ship {} -> {}, ruled out {} cells",
            self.name,
            lo,
            hi,
            before - self.available.len()
        );

        self.reset_hunt();
        self.random_available(rng)
    }

    /// Previous shot missed.
    fn after_miss(&mut self, miss: Cell, rng: &mut SmallRng) -> Option<Cell> {
        match self.hunt.len() {
            0 => {
                self.available.retain(|&c| c != miss);
                self.random_available(rng)
            }
            1 => {
                let origin = self.hunt[0];
                if let Some(step) = self.step {
                    self.tried.push(step);
                }
                let untried: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|d| !self.tried.contains(d))
                    .filter(|&d| self.is_legal(origin, d))
                    .collect();
                let dir = *untried.choose(rng)?;
                self.step = Some(dir);
                origin.step(dir)
            }
            _ => {
                // probed past the far end: come back through the first hit
                let step = self.step?.reversed();
                self.step = Some(step);
                self.hunt[0].step(step)
            }
        }
    }
}

impl Player for AutomaticPlayer {
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
        let planned = match self.prev_move {
            None => Some(self.target.center()),
            Some(prev) => {
                let outcome = self.outcome_of(prev).ok_or_else(|| {
                    anyhow!("{}: no result recorded for the shot at {}", self.name, prev)
                })?;
                match (outcome.hit, outcome.sunk) {
                    (true, false) => self.follow_hit(prev, rng),
                    (true, true) => self.finish_ship(prev, rng),
                    (false, _) => self.after_miss(prev, rng),
                }
            }
        };

        let target = match planned.filter(|c| self.available.contains(c)) {
            Some(cell) => cell,
            None => {
                if !self.hunt.is_empty() {
                    log::debug!(
                        "{}: hunt from {:?} has no legal probe left, abandoning it",
                        self.name,
                        self.hunt.first()
                    );
                    self.reset_hunt();
                }
                self.random_available(rng)
                    .ok_or_else(|| anyhow!("{}: no cells left to target", self.name))?
            }
        };

        self.available.retain(|&c| c != target);
        self.prev_move = Some(target);
        Ok(target)
    }

    fn receive_result(&mut self, is_ship_hit: bool, has_ship_sunk: bool) {
        let Some(prev) = self.prev_move else {
            return;
        };
        let outcome = ShotOutcome::new(is_ship_hit, has_ship_sunk);
        match self.shots.last_mut() {
            Some((cell, recorded)) if *cell == prev => *recorded = outcome,
            _ => self.shots.push((prev, outcome)),
        }
    }
}
