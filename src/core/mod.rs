pub mod board;
pub mod cell;
pub mod serialization;
pub mod setup;
pub mod types;

pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
pub use cell::Cell;
pub use setup::setup_from_strings;
pub use types::{Color, Direction, Position};
