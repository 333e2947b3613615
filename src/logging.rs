use tracing_subscriber::EnvFilter;

/// `RUST_LOG` が無いときのフィルタ
pub const DEFAULT_FILTER: &str = "warn";

/// ログ出力を初期化する。盤面表示を崩さないよう stderr に出す
///
/// 二度目以降の呼び出しは何もしない。
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
