//! Plain-text rendering of boards and shot grids.

use std::fmt::Write;

use crate::board::Board;
use crate::common::{Cell, Dimensions};
use crate::convert::column_label;
use crate::player::ShotOutcome;

/// Render a player's own board. With `reveal` unset, ships that have not been
/// hit stay hidden.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = render_grid(board.dimensions(), |cell| {
        let ship = board.ship_at(cell);
        match (board.is_attacked(cell), ship) {
            (true, Some(_)) => 'X',
            (true, None) => 'o',
            (false, Some(_)) if reveal => 'S',
            _ => '.',
        }
    });
    if reveal {
        out.push_str("Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Render the shots a player has fired at an opponent grid.
pub fn render_shots(dimensions: Dimensions, shots: &[(Cell, ShotOutcome)]) -> String {
    let mut out = render_grid(dimensions, |cell| {
        match shots.iter().rev().find(|&&(c, _)| c == cell) {
            Some((_, outcome)) if outcome.hit => 'X',
            Some(_) => 'o',
            None => '.',
        }
    });
    out.push_str("Legend: X=Hit  o=Miss  .=Unknown\n");
    out
}

fn render_grid(dimensions: Dimensions, glyph: impl Fn(Cell) -> char) -> String {
    let mut out = String::from("   ");
    for x in 1..=dimensions.width {
        let _ = write!(out, " {:>2}", column_label(x));
    }
    out.push('\n');
    for y in 1..=dimensions.height {
        let _ = write!(out, "{:>3}", y);
        for x in 1..=dimensions.width {
            let _ = write!(out, "  {}", glyph(Cell::new(x, y)));
        }
        out.push('\n');
    }
    out
}
