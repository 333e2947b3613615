use crate::core::{Board, Color, Position};
use crate::logic::GameState;
use crate::player::PlayerController;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// 1局の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub black_score: usize,
    pub white_score: usize,
    pub moves: usize,
    pub time_ms: u128,
    pub final_board: Board,
}

impl GameResult {
    /// 黒から見た石差
    pub fn margin(&self) -> i64 {
        self.black_score as i64 - self.white_score as i64
    }
}

/// 2人の対局者で1局を進める
pub struct Game {
    pub state: GameState,
    pub history: Vec<(Color, Position)>,
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Game {
            state,
            history: Vec::new(),
        }
    }

    pub fn with_size(size: usize) -> anyhow::Result<Self> {
        Ok(Self::new(GameState::with_size(size)?))
    }

    /// 1手進める。選ばれた手が合法でなければエラーで、状態は変わらない
    pub fn step(&mut self, controller: &dyn PlayerController) -> anyhow::Result<Position> {
        if self.state.is_game_over() {
            bail!("game is already over");
        }
        let color = self.state.turn();
        let Some(mv) = controller.choose_move(&self.state) else {
            bail!("{} ({}) returned no move", controller.name(), color);
        };
        self.state.apply(mv)?;
        self.history.push((color, mv));
        Ok(mv)
    }

    /// 外部入力なしで終局まで進める
    pub fn play_silent(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> anyhow::Result<GameResult> {
        self.play(black, white, |_, _, _| {})
    }

    /// 終局まで進め、各手のあとに `on_move` を呼ぶ
    pub fn play<F>(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
        mut on_move: F,
    ) -> anyhow::Result<GameResult>
    where
        F: FnMut(&GameState, Color, Position),
    {
        for controller in [black, white] {
            if controller.requires_external_input() {
                bail!("{} needs console input and cannot play here", controller.name());
            }
        }

        let start_time = Instant::now();
        while !self.state.is_game_over() {
            let color = self.state.turn();
            let controller = match color {
                Color::Black => black,
                Color::White => white,
            };
            let mv = self.step(controller)?;
            on_move(&self.state, color, mv);
        }

        let result = self.result(start_time.elapsed().as_millis());
        tracing::info!(
            winner = ?result.winner,
            black = result.black_score,
            white = result.white_score,
            moves = result.moves,
            "game over"
        );
        Ok(result)
    }

    pub fn result(&self, time_ms: u128) -> GameResult {
        GameResult {
            winner: self.state.winner(),
            black_score: self.state.black_score(),
            white_score: self.state.white_score(),
            moves: self.history.len(),
            time_ms,
            final_board: self.state.board().clone(),
        }
    }
}

/// "BLACK PLAYER WINS" / "WHITE PLAYER WINS" / "DRAW"
pub fn result_banner(winner: Option<Color>) -> String {
    match winner {
        Some(color) => format!("{} PLAYER WINS", color.name()),
        None => "DRAW".to_string(),
    }
}
