//! # Evaluation Module
//!
//! Static evaluation of a game state from one color's point of view
//! (positive = that color is ahead).
//!
//! ## Evaluators
//! - [`DiscParity`]: plain disc difference. Used by the minimax strategy.
//! - [`PositionalEvaluator`]: weighted sum of five terms, each computed as
//!   (own metric − opponent metric):
//!   1. **Disc parity**: score difference.
//!   2. **Actual mobility**: cells where a legal move exists right now.
//!   3. **Potential mobility**: empty cells touching an opponent disc.
//!   4. **Corners captured**: corners occupied.
//!   5. **Edge stability**: own discs chained to a corner along the edges.
//!
//! Every metric scans the board itself rather than the state's cached move
//! list, so hypothetical positions deep in the search are evaluated correctly.

use super::config::{AIConfig, EvalWeights};
use super::evaluator::Evaluator;
use crate::core::{Board, Cell, Color, Direction, Position};
use crate::logic::{frontier_count, mobility, GameState};
use std::collections::HashSet;

/// Disc difference from `color`'s perspective.
pub fn disc_parity(state: &GameState, color: Color) -> i32 {
    state.score(color) as i32 - state.score(color.opponent()) as i32
}

/// Difference in the number of cells each color could legally play.
pub fn actual_mobility(board: &Board, color: Color) -> i32 {
    mobility(board, color) as i32 - mobility(board, color.opponent()) as i32
}

/// Difference in empty cells adjacent to the other side's discs.
///
/// `color`'s potential moves are the empty cells next to an opponent disc,
/// so the frontier of the opponent counts for `color`.
pub fn potential_mobility(board: &Board, color: Color) -> i32 {
    frontier_count(board, color.opponent()) as i32 - frontier_count(board, color) as i32
}

fn corners_of(board: &Board, color: Color) -> i32 {
    let target: Cell = color.into();
    board
        .corners()
        .iter()
        .filter(|&&corner| board.state_at(corner) == target)
        .count() as i32
}

pub fn corners_captured(board: &Board, color: Color) -> i32 {
    corners_of(board, color) - corners_of(board, color.opponent())
}

// 角から辺に沿って自分の石を集める。自分以外の石・既出のマスで止まる
fn collect_edge_discs(
    board: &Board,
    color: Color,
    seen: &mut HashSet<Position>,
    start: Position,
    dir: Direction,
) {
    let target: Cell = color.into();
    let mut curr = Some(start);
    while let Some(pos) = curr {
        if board.state_at(pos) != target || seen.contains(&pos) {
            break;
        }
        seen.insert(pos);
        curr = board.offset(pos, dir);
    }
}

/// 4隅から2辺ずつ、計8回の走査で辿れる自分の石の数
///
/// 各角の2本目の走査は角自身が既出なので、1本目で角を取れていればすぐ止まる。
pub fn stable_edge_discs(board: &Board, color: Color) -> usize {
    let last = board.size() - 1;
    let scans = [
        (Position::new(0, 0), Direction::SOUTH),
        (Position::new(0, 0), Direction::EAST),
        (Position::new(last, 0), Direction::NORTH),
        (Position::new(last, 0), Direction::EAST),
        (Position::new(0, last), Direction::WEST),
        (Position::new(0, last), Direction::SOUTH),
        (Position::new(last, last), Direction::WEST),
        (Position::new(last, last), Direction::NORTH),
    ];

    let mut seen = HashSet::new();
    for (start, dir) in scans {
        collect_edge_discs(board, color, &mut seen, start, dir);
    }
    seen.len()
}

pub fn edge_stability(board: &Board, color: Color) -> i32 {
    stable_edge_discs(board, color) as i32 - stable_edge_discs(board, color.opponent()) as i32
}

/// 石差だけの評価
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscParity;

impl Evaluator for DiscParity {
    fn evaluate(&self, state: &GameState, color: Color) -> i32 {
        disc_parity(state, color)
    }

    fn name(&self) -> &str {
        "disc-parity"
    }
}

/// 重み付きの静的評価
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalEvaluator {
    pub weights: EvalWeights,
}

impl PositionalEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn from_config(config: &AIConfig) -> Self {
        Self::new(config.evaluation.weights)
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, state: &GameState, color: Color) -> i32 {
        let board = state.board();
        let w = &self.weights;
        w.disc_parity * disc_parity(state, color)
            + w.actual_mobility * actual_mobility(board, color)
            + w.potential_mobility * potential_mobility(board, color)
            + w.corners * corners_captured(board, color)
            + w.edge_stability * edge_stability(board, color)
    }

    fn name(&self) -> &str {
        "positional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;

    #[test]
    fn test_opening_is_balanced() {
        let state = GameState::new();
        let eval = PositionalEvaluator::default();
        assert_eq!(eval.evaluate(&state, Color::Black), 0);
        assert_eq!(eval.evaluate(&state, Color::White), 0);
    }

    #[test]
    fn test_after_first_move() {
        let mut state = GameState::new();
        state.apply_move(2, 3).unwrap();
        let board = state.board();

        assert_eq!(disc_parity(&state, Color::Black), 3);
        // 黒 3手 / 白 3手
        assert_eq!(actual_mobility(board, Color::Black), 0);
        // 白石に接する空マス 5, 黒石に接する空マス 13
        assert_eq!(potential_mobility(board, Color::Black), -8);
        assert_eq!(corners_captured(board, Color::Black), 0);
        assert_eq!(edge_stability(board, Color::Black), 0);

        let eval = PositionalEvaluator::default();
        assert_eq!(eval.evaluate(&state, Color::Black), 10 * 3 - 15 * 8);
        assert_eq!(eval.evaluate(&state, Color::White), -(10 * 3 - 15 * 8));
        assert_eq!(DiscParity.evaluate(&state, Color::White), -3);
    }

    #[test]
    fn test_corners_use_board_size() {
        let board = setup_from_strings(&[
            "B-----W", "-------", "-------", "-------", "-------", "-------", "B-----B",
        ])
        .unwrap();
        assert_eq!(corners_captured(&board, Color::Black), 2);
        assert_eq!(corners_captured(&board, Color::White), -2);
    }

    #[test]
    fn test_full_edge_is_stable() {
        let board = setup_from_strings(&[
            "BBBBBB", "------", "------", "------", "------", "------",
        ])
        .unwrap();
        assert_eq!(stable_edge_discs(&board, Color::Black), 6);
        assert_eq!(stable_edge_discs(&board, Color::White), 0);
    }

    #[test]
    fn test_edge_scan_stops_at_seen_corner() {
        let board = setup_from_strings(&[
            "BBBW--", "B-----", "------", "------", "------", "------",
        ])
        .unwrap();
        // 南への走査で (0,0),(1,0)。東への走査は既出の角で止まる
        assert_eq!(stable_edge_discs(&board, Color::Black), 2);
        assert_eq!(stable_edge_discs(&board, Color::White), 0);
    }

    #[test]
    fn test_custom_weights() {
        let mut state = GameState::new();
        state.apply_move(2, 3).unwrap();
        let eval = PositionalEvaluator::new(EvalWeights {
            disc_parity: 1,
            actual_mobility: 0,
            potential_mobility: 0,
            corners: 0,
            edge_stability: 0,
        });
        assert_eq!(
            eval.evaluate(&state, Color::Black),
            DiscParity.evaluate(&state, Color::Black)
        );
    }
}
