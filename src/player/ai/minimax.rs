use super::eval::DiscParity;
use super::evaluator::Evaluator;
use super::SearchResult;
use crate::core::{Color, Position};
use crate::logic::GameState;
use crate::player::PlayerController;
use std::cell::Cell;

/// 枝刈りなしの全幅 minimax
pub struct MinimaxAI<E: Evaluator = DiscParity> {
    pub name: String,
    pub depth: usize,
    evaluator: E,
    nodes_evaluated: Cell<usize>,
}

impl MinimaxAI<DiscParity> {
    pub const DEFAULT_DEPTH: usize = 3;

    pub fn new(name: &str) -> Self {
        Self::with_evaluator(name, Self::DEFAULT_DEPTH, DiscParity)
    }
}

impl<E: Evaluator> MinimaxAI<E> {
    pub fn with_evaluator(name: &str, depth: usize, evaluator: E) -> Self {
        Self {
            name: name.to_string(),
            depth: depth.max(1),
            evaluator,
            nodes_evaluated: Cell::new(0),
        }
    }

    pub fn nodes_evaluated(&self) -> usize {
        self.nodes_evaluated.get()
    }

    /// 手番側の最善手とその評価値。合法手が無ければ None
    pub fn search(&self, state: &GameState) -> Option<SearchResult> {
        self.nodes_evaluated.set(0);
        let me = state.turn();
        let mut best: Option<SearchResult> = None;

        for &mv in state.available_moves() {
            let mut next = state.clone();
            if next.apply(mv).is_err() {
                continue;
            }
            let score = self.minimax(&next, self.depth - 1, me);
            // 同点なら先に見つけた手を残す
            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult {
                    best_move: mv,
                    score,
                });
            }
        }

        if let Some(result) = best {
            tracing::debug!(
                ai = %self.name,
                evaluator = self.evaluator.name(),
                nodes = self.nodes_evaluated.get(),
                score = result.score,
                best = %result.best_move,
                "minimax search finished"
            );
        }
        best
    }

    fn minimax(&self, state: &GameState, depth: usize, me: Color) -> i32 {
        if state.is_game_over() || depth == 0 {
            self.nodes_evaluated.set(self.nodes_evaluated.get() + 1);
            return self.evaluator.evaluate(state, me);
        }

        // パス後は同じ色が続けて打つので、手番で最大化/最小化を決める
        let maximizing = state.turn() == me;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for &mv in state.available_moves() {
            let mut next = state.clone();
            if next.apply(mv).is_err() {
                continue;
            }
            let score = self.minimax(&next, depth - 1, me);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

impl<E: Evaluator> PlayerController for MinimaxAI<E> {
    fn choose_move(&self, state: &GameState) -> Option<Position> {
        self.search(state).map(|r| r.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
