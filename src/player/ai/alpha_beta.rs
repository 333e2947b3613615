use super::config::{AIConfig, StageDepths};
use super::eval::PositionalEvaluator;
use super::evaluator::Evaluator;
use super::stage::GameStage;
use super::tt::EvalCache;
use super::SearchResult;
use crate::core::{Color, Position};
use crate::logic::zobrist::ZobristHasher;
use crate::logic::GameState;
use crate::player::PlayerController;

use std::cell::{Cell, RefCell};

const DEFAULT_CACHE_ENTRIES: usize = 1 << 16;

/// alpha-beta 枝刈り付きの固定深さ探索
pub struct AlphaBetaAI<E: Evaluator = PositionalEvaluator> {
    pub name: String,
    pub depth: usize,
    /// Some なら局面の段階で深さを決める
    pub adaptive: Option<StageDepths>,
    evaluator: E,
    cache: RefCell<EvalCache>,
    nodes_evaluated: Cell<usize>,
}

impl AlphaBetaAI<PositionalEvaluator> {
    pub const DEFAULT_DEPTH: usize = 4;

    pub fn new(name: &str) -> Self {
        Self::with_evaluator(name, Self::DEFAULT_DEPTH, PositionalEvaluator::default())
    }

    pub fn from_config(name: &str, config: &AIConfig) -> Self {
        let search = &config.search;
        let mut ai = Self::with_evaluator(
            name,
            search.alpha_beta_depth,
            PositionalEvaluator::from_config(config),
        );
        ai.cache = RefCell::new(EvalCache::new(search.eval_cache_entries));
        if search.adaptive_depth {
            ai.adaptive = Some(search.stage_depths);
        }
        ai
    }
}

impl<E: Evaluator> AlphaBetaAI<E> {
    pub fn with_evaluator(name: &str, depth: usize, evaluator: E) -> Self {
        Self {
            name: name.to_string(),
            depth: depth.max(1),
            adaptive: None,
            evaluator,
            cache: RefCell::new(EvalCache::new(DEFAULT_CACHE_ENTRIES)),
            nodes_evaluated: Cell::new(0),
        }
    }

    pub fn nodes_evaluated(&self) -> usize {
        self.nodes_evaluated.get()
    }

    pub fn cache_hits(&self) -> usize {
        self.cache.borrow().hits()
    }

    /// この局面で使う探索深さ
    pub fn depth_for(&self, state: &GameState) -> usize {
        match &self.adaptive {
            Some(depths) => GameStage::of(state).depth(depths).max(1),
            None => self.depth,
        }
    }

    // --- Search Root ---
    /// 手番側の最善手とその評価値。合法手が無ければ None
    pub fn search(&self, state: &GameState) -> Option<SearchResult> {
        self.nodes_evaluated.set(0);
        let hits_before = self.cache.borrow().hits();
        let me = state.turn();
        let depth = self.depth_for(state);

        // ルートでは alpha だけを更新する
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<SearchResult> = None;

        for &mv in state.available_moves() {
            let mut next = state.clone();
            if next.apply(mv).is_err() {
                continue;
            }
            let score = self.alpha_beta(&next, depth - 1, me, alpha, beta);
            alpha = alpha.max(score);
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
                depth,
                nodes = self.nodes_evaluated.get(),
                cache_hits = self.cache.borrow().hits() - hits_before,
                score = result.score,
                best = %result.best_move,
                "alpha-beta search finished"
            );
        }
        best
    }

    // --- Alpha-Beta Search ---
    fn alpha_beta(
        &self,
        state: &GameState,
        depth: usize,
        me: Color,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if state.is_game_over() || depth == 0 {
            return self.evaluate_leaf(state, me);
        }

        let maximizing = state.turn() == me;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for &mv in state.available_moves() {
            let mut next = state.clone();
            if next.apply(mv).is_err() {
                continue;
            }
            let score = self.alpha_beta(&next, depth - 1, me, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break; // cutoff
            }
        }
        best
    }

    fn evaluate_leaf(&self, state: &GameState, me: Color) -> i32 {
        self.nodes_evaluated.set(self.nodes_evaluated.get() + 1);
        let hash = ZobristHasher::compute_hash(state.board(), me);
        if let Some(score) = self.cache.borrow_mut().get(hash) {
            return score;
        }
        let score = self.evaluator.evaluate(state, me);
        self.cache.borrow_mut().store(hash, score);
        score
    }
}

impl<E: Evaluator> PlayerController for AlphaBetaAI<E> {
    fn choose_move(&self, state: &GameState) -> Option<Position> {
        self.search(state).map(|r| r.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;
    use crate::player::ai::eval::DiscParity;
    use crate::player::ai::MinimaxAI;

    #[test]
    fn test_matches_minimax_from_opening() {
        let state = GameState::new();
        let ab = AlphaBetaAI::with_evaluator("ab", 3, DiscParity);
        let mm = MinimaxAI::new("mm");
        assert_eq!(ab.search(&state), mm.search(&state));
        assert!(ab.nodes_evaluated() <= mm.nodes_evaluated());
    }

    #[test]
    fn test_positional_default_depth_is_four() {
        let ai = AlphaBetaAI::new("static");
        assert_eq!(ai.depth_for(&GameState::new()), 4);
        let result = ai.search(&GameState::new()).unwrap();
        assert!(GameState::new().is_valid_move(result.best_move.row, result.best_move.col));
    }

    #[test]
    fn test_takes_winning_corner() {
        // 角 (0,0) を取れば白が全滅する
        let board = setup_from_strings(&[
            "-WWWWB", "------", "------", "------", "------", "------",
        ])
        .unwrap();
        let state = GameState::from_board(board, Color::Black);
        let ai = AlphaBetaAI::new("static");
        assert_eq!(ai.choose_move(&state), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_adaptive_depth_from_config() {
        let mut config = AIConfig::default();
        config.search.adaptive_depth = true;
        let ai = AlphaBetaAI::from_config("adaptive", &config);
        // 序盤は starting の深さ
        assert_eq!(ai.depth_for(&GameState::new()), 3);

        config.search.adaptive_depth = false;
        let ai = AlphaBetaAI::from_config("fixed", &config);
        assert_eq!(ai.depth_for(&GameState::new()), 4);
    }

    #[test]
    fn test_cache_does_not_change_result() {
        let mut state = GameState::new();
        state.apply_move(2, 3).unwrap();
        let ai = AlphaBetaAI::new("cached");
        let first = ai.search(&state);
        let second = ai.search(&state);
        assert_eq!(first, second);
        assert!(ai.cache_hits() > 0);
    }
}
