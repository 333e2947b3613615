//! Evaluator trait for position evaluation
//!
//! Defines a common interface for different evaluation strategies.

use crate::core::Color;
use crate::logic::GameState;

/// Trait for evaluating game positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the state from `color`'s perspective
    ///
    /// Returns:
    ///   - Positive score: `color` advantage
    ///   - Negative score: opponent advantage
    ///   - Zero: Equal position
    fn evaluate(&self, state: &GameState, color: Color) -> i32;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}
