/// エンジン全体で使うエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OthelloError {
    #[error("board size {size} is out of range (6..=12)")]
    BoardSize { size: usize },

    #[error("current player cannot make a move at (row={row}, col={col})")]
    IllegalMove { row: usize, col: usize },

    #[error("coordinate (row={row}, col={col}) is outside the board")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("coordinate (row={row}, col={col}) already holds a token")]
    OccupiedCell { row: usize, col: usize },

    #[error("malformed board setup: {0}")]
    MalformedSetup(String),

    #[error("unknown player kind: {0:?}")]
    UnknownPlayerKind(String),
}

pub type Result<T> = std::result::Result<T, OthelloError>;
