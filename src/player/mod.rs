pub mod ai;
pub mod console;
pub mod controller;

use crate::core::Position;
use crate::error::OthelloError;
use crate::logic::GameState;
use ai::{AIConfig, AlphaBetaAI, MinimaxAI, RandomAI};
use std::fmt;
use std::str::FromStr;

pub use console::ConsoleInput;
pub use controller::PlayerController;

/// プレイヤーの種類 (メニューや設定での名前)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Random,
    Minimax,
    AlphaBeta,
    External,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::External,
        PlayerKind::Random,
        PlayerKind::Minimax,
        PlayerKind::AlphaBeta,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Random => "Random AI",
            PlayerKind::Minimax => "Basic AI",
            PlayerKind::AlphaBeta => "Static AI",
            PlayerKind::External => "Console",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayerKind {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "random ai" | "random" => Ok(PlayerKind::Random),
            "basic ai" | "minimax" => Ok(PlayerKind::Minimax),
            "static ai" | "alphabeta" | "alpha-beta" => Ok(PlayerKind::AlphaBeta),
            "console" | "human" => Ok(PlayerKind::External),
            _ => Err(OthelloError::UnknownPlayerKind(s.to_string())),
        }
    }
}

/// 対局者。分岐は閉じた列挙で行い、外部入力が要るかはフラグで判断する
pub enum Player {
    Random(RandomAI),
    Minimax(MinimaxAI),
    AlphaBeta(AlphaBetaAI),
    /// 手はドライバが外から受け取る
    External { name: String },
}

impl Player {
    pub fn create(kind: PlayerKind, name: &str, config: &AIConfig) -> Self {
        match kind {
            PlayerKind::Random => Player::Random(RandomAI::new(name)),
            PlayerKind::Minimax => Player::Minimax(MinimaxAI::with_evaluator(
                name,
                config.search.minimax_depth,
                ai::DiscParity,
            )),
            PlayerKind::AlphaBeta => Player::AlphaBeta(AlphaBetaAI::from_config(name, config)),
            PlayerKind::External => Player::External {
                name: name.to_string(),
            },
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Random(_) => PlayerKind::Random,
            Player::Minimax(_) => PlayerKind::Minimax,
            Player::AlphaBeta(_) => PlayerKind::AlphaBeta,
            Player::External { .. } => PlayerKind::External,
        }
    }
}

impl PlayerController for Player {
    fn choose_move(&self, state: &GameState) -> Option<Position> {
        match self {
            Player::Random(ai) => ai.choose_move(state),
            Player::Minimax(ai) => ai.choose_move(state),
            Player::AlphaBeta(ai) => ai.choose_move(state),
            Player::External { .. } => None,
        }
    }

    fn name(&self) -> &str {
        match self {
            Player::Random(ai) => ai.name(),
            Player::Minimax(ai) => ai.name(),
            Player::AlphaBeta(ai) => ai.name(),
            Player::External { name } => name,
        }
    }

    fn requires_external_input(&self) -> bool {
        matches!(self, Player::External { .. })
    }
}
