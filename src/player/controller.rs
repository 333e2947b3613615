use crate::core::Position;
use crate::logic::GameState;

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// 手番側として打つ手を選ぶ。選べない (合法手なし・外部入力待ち) なら None
    fn choose_move(&self, state: &GameState) -> Option<Position>;
    fn name(&self) -> &str;
    /// 外部 (人間など) からの入力を待つ必要があるか
    fn requires_external_input(&self) -> bool {
        false
    }
}
