//! Othello (Reversi) rules engine and search AI.
//!
//! - [`core`]: board, cells, coordinates, text setup
//! - [`logic`]: flank scanning, legal moves, [`logic::GameState`]
//! - [`player`]: the player capability and the stock strategies
//! - [`game`], [`selfplay`], [`display`]: drivers used by the binaries

pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logging;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{Board, Cell, Color, Position};
pub use error::{OthelloError, Result};
pub use logic::GameState;
pub use player::{Player, PlayerController, PlayerKind};
