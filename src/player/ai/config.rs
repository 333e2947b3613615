use anyhow::{bail, Context};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// 設定ファイルの既定パス
pub const CONFIG_PATH: &str = "ai_config.json";
/// パスを上書きする環境変数
pub const CONFIG_ENV: &str = "OTHELLO_AI_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub weights: EvalWeights,
}

/// 局面評価の各項の重み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub disc_parity: i32,
    pub actual_mobility: i32,
    pub potential_mobility: i32,
    pub corners: i32,
    pub edge_stability: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            disc_parity: 10,
            actual_mobility: 20,
            potential_mobility: 15,
            corners: 1000,
            edge_stability: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub minimax_depth: usize,
    pub alpha_beta_depth: usize,
    /// 有効なら alpha-beta の深さを局面の段階で変える
    #[serde(default)]
    pub adaptive_depth: bool,
    #[serde(default)]
    pub stage_depths: StageDepths,
    pub eval_cache_entries: usize,
}

/// 段階ごとの探索深さ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDepths {
    pub starting: usize,
    pub middle: usize,
    pub ending: usize,
}

impl Default for StageDepths {
    fn default() -> Self {
        StageDepths {
            starting: 3,
            middle: 4,
            ending: 6,
        }
    }
}

static CONFIG: OnceCell<AIConfig> = OnceCell::new();

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path))?;
        Self::from_json(&config_str)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: AIConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("AI config not loaded, using defaults: {:#}", e);
            Self::default()
        })
    }

    /// プロセス全体で共有する設定 (初回アクセス時に読み込む)
    pub fn get() -> &'static AIConfig {
        CONFIG.get_or_init(Self::load_or_default)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let s = &self.search;
        if s.minimax_depth == 0 || s.alpha_beta_depth == 0 {
            bail!("search depths must be at least 1");
        }
        let d = s.stage_depths;
        if d.starting == 0 || d.middle == 0 || d.ending == 0 {
            bail!("stage depths must be at least 1");
        }
        if s.eval_cache_entries == 0 {
            bail!("eval_cache_entries must be at least 1");
        }
        Ok(())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig {
                weights: EvalWeights::default(),
            },
            search: SearchConfig {
                minimax_depth: 3,
                alpha_beta_depth: 4,
                adaptive_depth: false,
                stage_depths: StageDepths::default(),
                eval_cache_entries: 1 << 16,
            },
        }
    }
}
