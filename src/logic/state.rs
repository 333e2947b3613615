use super::{flankable_tiles, legal_moves};
use crate::core::{Board, Cell, Color, Position};
use crate::error::{OthelloError, Result};

/// 対局状態。盤面・手番・得点・合法手を持つ
///
/// 変更は [`GameState::apply_move`] だけを通す。探索では丸ごと clone して使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    black_score: usize,
    white_score: usize,
    turn: Color,
    game_over: bool,
    available_moves: Vec<Position>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// 8x8 の標準局面
    pub fn new() -> Self {
        Self::from_parts(Board::standard(), 2, 2, Color::Black)
    }

    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self::from_parts(Board::new(size)?, 2, 2, Color::Black))
    }

    /// 任意局面から開始する。得点は盤面から数え、パス・終局も判定する
    pub fn from_board(board: Board, turn: Color) -> Self {
        let black = board.count(Cell::Black);
        let white = board.count(Cell::White);
        Self::from_parts(board, black, white, turn)
    }

    fn from_parts(board: Board, black_score: usize, white_score: usize, turn: Color) -> Self {
        let mut state = GameState {
            board,
            black_score,
            white_score,
            turn,
            game_over: false,
            available_moves: Vec::new(),
        };
        state.available_moves = legal_moves(&state.board, state.turn);
        if state.available_moves.is_empty() {
            state.game_over = state.pass_turn();
        }
        state
    }

    pub fn black_score(&self) -> usize {
        self.black_score
    }

    pub fn white_score(&self) -> usize {
        self.white_score
    }

    pub fn score(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_score,
            Color::White => self.white_score,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_black_turn(&self) -> bool {
        self.turn == Color::Black
    }

    pub fn is_white_turn(&self) -> bool {
        self.turn == Color::White
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 手番側の合法手 (row-major 順)
    pub fn available_moves(&self) -> &[Position] {
        &self.available_moves
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.board.is_valid_coordinate(row, col)
            && self.available_moves.contains(&Position::new(row, col))
    }

    /// 勝者。引き分けと対局中は None
    pub fn winner(&self) -> Option<Color> {
        if !self.game_over {
            return None;
        }
        match self.black_score.cmp(&self.white_score) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// 着手して裏返した石の数を返す。不正な手なら状態は変えずにエラー
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<usize> {
        if !self.is_valid_move(row, col) {
            return Err(OthelloError::IllegalMove { row, col });
        }
        let pos = Position::new(row, col);
        let mover = self.turn;

        // 置く前に挟める石を集める (置いた後でも結果は同じ)
        let flips = flankable_tiles(&self.board, pos, mover);
        self.board.place_token(pos, mover)?;
        for &tile in &flips {
            self.board.flank(tile)?;
        }
        self.update_score(flips.len());
        self.game_over = self.update_turn();

        tracing::trace!(%pos, color = %mover, flips = flips.len(), "move applied");
        Ok(flips.len())
    }

    pub fn apply(&mut self, pos: Position) -> Result<usize> {
        self.apply_move(pos.row, pos.col)
    }

    // 置いた石 + 裏返した数が加算、相手は裏返された分だけ減る
    fn update_score(&mut self, flipped: usize) {
        match self.turn {
            Color::Black => {
                self.black_score += flipped + 1;
                self.white_score -= flipped;
            }
            Color::White => {
                self.white_score += flipped + 1;
                self.black_score -= flipped;
            }
        }
    }

    /// 手番を進める。終局なら true
    fn update_turn(&mut self) -> bool {
        self.turn = self.turn.opponent();
        self.available_moves = legal_moves(&self.board, self.turn);
        if self.available_moves.is_empty() {
            return self.pass_turn();
        }
        false
    }

    // 打てる手が無いのでパス。相手も打てなければ終局
    fn pass_turn(&mut self) -> bool {
        self.turn = self.turn.opponent();
        self.available_moves = legal_moves(&self.board, self.turn);
        self.available_moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.black_score(), 2);
        assert_eq!(state.white_score(), 2);
        assert!(state.is_black_turn());
        assert!(!state.is_white_turn());
        assert!(!state.is_game_over());
        assert_eq!(state.available_moves().len(), 4);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_first_move() {
        let mut state = GameState::new();
        for (r, c) in [(2, 3), (3, 2), (4, 5), (5, 4)] {
            assert!(state.is_valid_move(r, c));
        }
        assert!(!state.is_valid_move(2, 4));
        assert!(!state.is_valid_move(8, 8));

        let flipped = state.apply_move(2, 3).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(state.black_score(), 4);
        assert_eq!(state.white_score(), 1);
        assert!(state.is_white_turn());
        assert_eq!(state.board().state_at(Position::new(3, 3)), Cell::Black);
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut state = GameState::new();
        let before = state.clone();
        for (r, c) in [(0, 0), (3, 3), (2, 4), (8, 0), (100, 100)] {
            assert_eq!(
                state.apply_move(r, c),
                Err(OthelloError::IllegalMove { row: r, col: c })
            );
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_forced_pass() {
        // 白の合法手は (0,4) だけ。3石まとめて返す
        let board = setup_from_strings(&[
            "WBBB--", "------", "------", "------", "------", "-----W",
        ])
        .unwrap();
        let mut state = GameState::from_board(board, Color::White);
        assert!(!state.is_game_over());
        assert_eq!(state.available_moves(), &[Position::new(0, 4)]);

        state.apply_move(0, 4).unwrap();
        assert_eq!(state.white_score(), 6);
        assert_eq!(state.black_score(), 0);
        // 黒石が無いので黒も白も打てず終局
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Color::White));
    }

    #[test]
    fn test_pass_keeps_turn_with_mover() {
        let board = setup_from_strings(&[
            "-WB-WB", "------", "------", "------", "------", "------",
        ])
        .unwrap();
        let mut state = GameState::from_board(board, Color::Black);
        assert_eq!(
            state.available_moves(),
            &[Position::new(0, 0), Position::new(0, 3)]
        );

        state.apply_move(0, 0).unwrap();
        // 白は (0,4) の1石だけで挟めないのでパス
        assert!(state.is_black_turn());
        assert!(!state.is_game_over());
        assert_eq!(state.available_moves(), &[Position::new(0, 3)]);
        assert_eq!((state.black_score(), state.white_score()), (4, 1));

        state.apply_move(0, 3).unwrap();
        assert!(state.is_game_over());
        assert_eq!((state.black_score(), state.white_score()), (6, 0));
        assert_eq!(state.winner(), Some(Color::Black));
    }

    #[test]
    fn test_from_board_resolves_terminal_position() {
        let board = setup_from_strings(&[
            "BBBBBB", "BBBBBB", "BBBBBB", "WWWWWW", "WWWWWW", "WWWWWW",
        ])
        .unwrap();
        let state = GameState::from_board(board, Color::Black);
        assert!(state.is_game_over());
        assert_eq!(state.black_score(), 18);
        assert_eq!(state.white_score(), 18);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let state = GameState::new();
        let mut copy = state.clone();
        copy.apply_move(2, 3).unwrap();
        assert_eq!(state.black_score(), 2);
        assert_eq!(state.white_score(), 2);
        assert!(state.is_black_turn());
        assert_eq!(state.available_moves().len(), 4);
        assert_eq!(state.board(), &Board::standard());
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let board = setup_from_strings(&[
            "BBBBBB", "BBBBBB", "BBBBBB", "BBBBBB", "BBBBBB", "BBBBB-",
        ])
        .unwrap();
        let mut state = GameState::from_board(board, Color::White);
        assert!(state.is_game_over());
        assert!(state.available_moves().is_empty());
        assert!(state.apply_move(5, 5).is_err());
        assert!(state.is_game_over());
    }
}
