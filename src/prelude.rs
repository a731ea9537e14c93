//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackOutcome, AutomaticPlayer, Board, BoardError, Cell, CellConverter, Dimensions,
    FleetSpec, Game, GameConfig, GameStatus, ManualPlayer, Player, RandomPlayer, Ship,
    ShipFactory,
};
