//! Turn-based game driver and batch simulation.

use anyhow::bail;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{AttackOutcome, Cell};
use crate::config::GameConfig;
use crate::player::{AutomaticPlayer, Player, PlayerNamer, RandomPlayer};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    /// Index (0 or 1) of the winning player.
    Won(usize),
}

/// One resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub attacker: usize,
    pub target: Cell,
    pub outcome: AttackOutcome,
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub winner: usize,
    pub winner_name: String,
    pub turns: usize,
    /// Shots fired by each player.
    pub shots: [usize; 2],
}

/// Two players taking alternate shots at each other's boards. The first
/// player shoots first.
pub struct Game {
    players: [Box<dyn Player>; 2],
    next: usize,
    turns: usize,
    shots: [usize; 2],
    status: GameStatus,
    max_turns: usize,
}

impl Game {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        // nobody can need more shots than there are cells to shoot at
        let max_turns = 2 * first
            .board()
            .dimensions()
            .cell_count()
            .max(second.board().dimensions().cell_count())
            + 2;
        Self {
            players: [first, second],
            next: 0,
            turns: 0,
            shots: [0, 0],
            status: GameStatus::InProgress,
            max_turns,
        }
    }

    pub fn player(&self, index: usize) -> &dyn Player {
        self.players[index].as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Play a single attack and report it.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnRecord> {
        self.refresh_status();
        if let GameStatus::Won(winner) = self.status {
            bail!("game is already over, {} won", self.players[winner].name());
        }
        if self.turns >= self.max_turns {
            bail!("game did not finish within {} turns", self.max_turns);
        }

        let attacker = self.next;
        let defender = 1 - attacker;
        let target = self.players[attacker].select_target(rng)?;
        let outcome = self.players[defender].board_mut().receive_attack(target)?;
        self.players[attacker].receive_result(outcome.hit, outcome.sunk);

        self.turns += 1;
        self.shots[attacker] += 1;
        log::trace!(
            "turn {}: {} fired at {}: hit={} sunk={}",
            self.turns,
            self.players[attacker].name(),
            target,
            outcome.hit,
            outcome.sunk
        );

        if self.players[defender].has_lost() {
            self.status = GameStatus::Won(attacker);
            log::info!(
                "{} wins after {} turns",
                self.players[attacker].name(),
                self.turns
            );
        } else {
            self.next = defender;
        }

        Ok(TurnRecord {
            turn: self.turns,
            attacker,
            target,
            outcome,
        })
    }

    /// Play until one side has lost every ship.
    pub fn play(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameReport> {
        loop {
            self.refresh_status();
            if let Some(report) = self.report() {
                return Ok(report);
            }
            self.play_turn(rng)?;
        }
    }

    /// Summary of the game once it is over.
    pub fn report(&self) -> Option<GameReport> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(winner) => Some(GameReport {
                winner,
                winner_name: self.players[winner].name().to_string(),
                turns: self.turns,
                shots: self.shots,
            }),
        }
    }

    /// A side can start with nothing afloat, e.g. an empty board.
    fn refresh_status(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if self.players[self.next].has_lost() {
            self.status = GameStatus::Won(1 - self.next);
        } else if self.players[1 - self.next].has_lost() {
            self.status = GameStatus::Won(self.next);
        }
    }
}

/// Aggregate result of automatic-versus-random games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub seed: u64,
    pub automatic_wins: usize,
    pub random_wins: usize,
    pub average_turns: f64,
}

impl SimulationSummary {
    pub fn automatic_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.automatic_wins as f64 / self.games as f64
        }
    }
}

/// Play `games` automatic-versus-random games.
///
/// Game `i` is seeded with `seed + i`; the automatic player shoots first in
/// even-numbered games and second in odd-numbered ones.
pub fn simulate(config: &GameConfig, games: usize, seed: u64) -> anyhow::Result<SimulationSummary> {
    let mut namer = PlayerNamer::new();
    let mut automatic_wins = 0;
    let mut total_turns = 0;

    for i in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        namer.reset();
        let automatic: Box<dyn Player> = Box::new(AutomaticPlayer::new(
            namer.name(Some("Automatic")),
            Board::from_config(&mut rng, config)?,
        ));
        let random: Box<dyn Player> = Box::new(RandomPlayer::new(
            namer.name(Some("Random")),
            Board::from_config(&mut rng, config)?,
        ));

        let automatic_first = i % 2 == 0;
        let mut game = if automatic_first {
            Game::new(automatic, random)
        } else {
            Game::new(random, automatic)
        };
        let report = game.play(&mut rng)?;
        log::debug!(
            "game {}: {} won in {} turns",
            i + 1,
            report.winner_name,
            report.turns
        );

        if (report.winner == 0) == automatic_first {
            automatic_wins += 1;
        }
        total_turns += report.turns;
    }

    Ok(SimulationSummary {
        games,
        seed,
        automatic_wins,
        random_wins: games - automatic_wins,
        average_turns: if games == 0 {
            0.0
        } else {
            total_turns as f64 / games as f64
        },
    })
}
