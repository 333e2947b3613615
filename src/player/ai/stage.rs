use super::config::StageDepths;
use crate::core::Cell;
use crate::logic::GameState;

/// 対局の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStage {
    Starting,
    Middle,
    Ending,
    GameOver,
}

impl GameStage {
    pub fn of(state: &GameState) -> Self {
        if state.is_game_over() {
            return GameStage::GameOver;
        }
        let board = state.board();
        let cells = board.size() * board.size();
        let empty = board.count(Cell::Empty);
        let discs = cells - empty;

        if empty <= board.size() {
            GameStage::Ending
        } else if discs <= cells / 3 {
            GameStage::Starting
        } else {
            GameStage::Middle
        }
    }

    /// この段階での探索深さ。終局後は 0
    pub fn depth(self, depths: &StageDepths) -> usize {
        match self {
            GameStage::Starting => depths.starting,
            GameStage::Middle => depths.middle,
            GameStage::Ending => depths.ending,
            GameStage::GameOver => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setup_from_strings, Color};

    #[test]
    fn test_opening_is_starting() {
        assert_eq!(GameStage::of(&GameState::new()), GameStage::Starting);
    }

    #[test]
    fn test_middle_and_ending() {
        // 36マス中 14石 (> 12) で中盤
        let board = setup_from_strings(&[
            "------", "-BBBW-", "-BWWB-", "-BWBW-", "--WB--", "------",
        ])
        .unwrap();
        let state = GameState::from_board(board, Color::Black);
        assert_eq!(GameStage::of(&state), GameStage::Middle);

        // 空き 2 マス (<= 6) で終盤
        let board = setup_from_strings(&[
            "BBBBBB", "BBBBBB", "BBWWWW", "WWWWWW", "WWWWWB", "WWWW--",
        ])
        .unwrap();
        let state = GameState::from_board(board, Color::Black);
        assert_eq!(GameStage::of(&state), GameStage::Ending);
    }

    #[test]
    fn test_stage_depths() {
        let depths = StageDepths::default();
        assert_eq!(GameStage::Starting.depth(&depths), 3);
        assert_eq!(GameStage::Middle.depth(&depths), 4);
        assert_eq!(GameStage::Ending.depth(&depths), 6);
        assert_eq!(GameStage::GameOver.depth(&depths), 0);
    }
}
