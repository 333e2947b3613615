pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod random;
pub mod stage;
pub mod tt;

use crate::core::Position;

pub use alpha_beta::AlphaBetaAI;
pub use config::AIConfig;
pub use eval::{DiscParity, PositionalEvaluator};
pub use evaluator::Evaluator;
pub use minimax::MinimaxAI;
pub use random::RandomAI;
pub use stage::GameStage;

/// 探索の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Position,
    pub score: i32,
}
