use crate::core::Position;
use crate::logic::GameState;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// 合法手から一様に選ぶ
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// 再現可能な乱数列で作る (自己対戦・テスト用)
    pub fn with_seed(name: &str, seed: u64) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, state: &GameState) -> Option<Position> {
        let mut rng = self.rng.borrow_mut();
        state.available_moves().choose(&mut *rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_is_legal() {
        let ai = RandomAI::new("random");
        let state = GameState::new();
        for _ in 0..20 {
            let mv = ai.choose_move(&state).unwrap();
            assert!(state.is_valid_move(mv.row, mv.col));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = RandomAI::with_seed("a", 7);
        let b = RandomAI::with_seed("b", 7);
        let mut state = GameState::new();
        while !state.is_game_over() {
            let mv = a.choose_move(&state).unwrap();
            assert_eq!(b.choose_move(&state), Some(mv));
            state.apply(mv).unwrap();
        }
    }
}
