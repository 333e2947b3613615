use crate::game::{Game, GameResult};
use crate::player::ai::{AIConfig, RandomAI};
use crate::player::{Player, PlayerKind};
use chrono::{DateTime, Local};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub board_size: usize,
    pub black: PlayerKind,
    pub white: PlayerKind,
    /// ランダム系プレイヤーのシード。Some なら game 番号を足して使う
    pub seed: Option<u64>,
    pub parallel: bool,
    pub ai_config: AIConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            board_size: 8,
            black: PlayerKind::AlphaBeta,
            white: PlayerKind::Minimax,
            seed: None,
            parallel: false,
            ai_config: AIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub started_at: DateTime<Local>,
    pub board_size: usize,
    pub black: String,
    pub white: String,
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    /// 黒から見た平均石差
    pub avg_margin: f64,
    pub avg_time_ms: f64,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(config: &SelfPlayConfig) -> Self {
        Self {
            started_at: Local::now(),
            board_size: config.board_size,
            black: config.black.label().to_string(),
            white: config.white.label().to_string(),
            total_games: 0,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_margin: 0.0,
            avg_time_ms: 0.0,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(crate::core::Color::Black) => self.black_wins += 1,
            Some(crate::core::Color::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let n = self.games.len() as f64;
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_margin: i64 = self.games.iter().map(|g| g.margin()).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / n;
        self.avg_margin = total_margin as f64 / n;
        self.avg_time_ms = total_time as f64 / n;
    }
}

fn make_player(kind: PlayerKind, name: &str, seed: Option<u64>, config: &AIConfig) -> Player {
    match (kind, seed) {
        (PlayerKind::Random, Some(seed)) => Player::Random(RandomAI::with_seed(name, seed)),
        _ => Player::create(kind, name, config),
    }
}

fn play_one(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<GameResult> {
    let seed = config.seed.map(|s| s.wrapping_add(game_num as u64 * 2));
    let black = make_player(config.black, "Black", seed, &config.ai_config);
    let white = make_player(
        config.white,
        "White",
        seed.map(|s| s.wrapping_add(1)),
        &config.ai_config,
    );

    let mut game = Game::with_size(config.board_size)?;
    let result = game.play_silent(&black, &white)?;
    tracing::info!(
        game = game_num,
        winner = ?result.winner,
        black = result.black_score,
        white = result.white_score,
        "self-play game finished"
    );
    Ok(result)
}

/// 設定どおりに対局を繰り返して集計する
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new(config);

    let results: Vec<GameResult> = if config.parallel {
        (1..=config.num_games)
            .into_par_iter()
            .map(|n| play_one(config, n))
            .collect::<anyhow::Result<_>>()?
    } else {
        (1..=config.num_games)
            .map(|n| play_one(config, n))
            .collect::<anyhow::Result<_>>()?
    };

    for result in results {
        stats.add_result(result);
    }
    Ok(stats)
}
