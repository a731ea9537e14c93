use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::Cell;
use crate::convert::CellConverter;
use crate::ui;

use super::{Player, ShotOutcome};

/// Player typing coordinates such as `C7` on a text stream.
pub struct ManualPlayer<R, W> {
    name: String,
    board: Board,
    converter: CellConverter,
    input: R,
    output: W,
    shots: Vec<(Cell, ShotOutcome)>,
    pending: Option<Cell>,
}

impl ManualPlayer<StdinLock<'static>, Stdout> {
    /// A player reading from the terminal.
    pub fn stdio(name: impl Into<String>, board: Board) -> Self {
        ManualPlayer::new(name, board, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ManualPlayer<R, W> {
    pub fn new(name: impl Into<String>, board: Board, input: R, output: W) -> Self {
        let converter = CellConverter::new(board.dimensions());
        Self {
            name: name.into(),
            board,
            converter,
            input,
            output,
            shots: Vec::new(),
            pending: None,
        }
    }

    /// Shots fired so far with their outcomes.
    pub fn shots(&self) -> &[(Cell, ShotOutcome)] {
        &self.shots
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn already_fired(&self, cell: Cell) -> bool {
        self.shots.iter().any(|&(c, _)| c == cell)
    }
}

impl<R: BufRead, W: Write> Player for ManualPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Cell> {
        writeln!(self.output, "It is now {}'s turn.", self.name)?;
        write!(
            self.output,
            "{}",
            ui::render_shots(self.converter.dimensions(), &self.shots)
        )?;

        loop {
            write!(self.output, "coordinates target = ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before {} chose a target", self.name);
            }
            match self.converter.parse(&line) {
                Ok(cell) if self.already_fired(cell) => {
                    writeln!(self.output, "You already fired at {}.", line.trim())?;
                }
                Ok(cell) => {
                    self.pending = Some(cell);
                    return Ok(cell);
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn receive_result(&mut self, is_ship_hit: bool, has_ship_sunk: bool) {
        let Some(cell) = self.pending.take() else {
            return;
        };
        self.shots
            .push((cell, ShotOutcome::new(is_ship_hit, has_ship_sunk)));
        let message = match (is_ship_hit, has_ship_sunk) {
            (true, true) => "Hit and sunk!",
            (true, false) => "Hit!",
            (false, _) => "Miss.",
        };
        if let Err(e) = writeln!(self.output, "{}", message) {
            log::warn!("{}: could not report shot result: {}", self.name, e);
        }
    }
}
