mod board;
mod common;
mod config;
pub mod convert;
mod factory;
mod game;
mod logging;
pub mod player;
pub mod prelude;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use convert::{CellConverter, ParseError};
pub use factory::*;
pub use game::*;
pub use logging::init_logging;
pub use player::{AutomaticPlayer, ManualPlayer, Player, PlayerNamer, RandomPlayer, ShotOutcome};
pub use ship::*;
