//! ログ初期化
//!
//! 標準エラー出力へのコンパクトな出力と、任意で日次ローテーションのファイル出力を設定します。
//! `RUST_LOG` が設定されている場合は設定ファイルのログレベルより優先されます。

use crate::config::{ConfigManager, LogConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// ログファイル名の接頭辞
const LOG_FILE_PREFIX: &str = "chatpulse.log";

/// ログフィルターを構築
pub fn build_env_filter(level: &str) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_env_filter(from_env.as_deref(), level)
}

/// 環境変数の指定があればそれを、なければ設定値を使う
fn resolve_env_filter(env_directives: Option<&str>, level: &str) -> EnvFilter {
    env_directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// ログを初期化
///
/// ファイル出力が有効な場合、返された `WorkerGuard` を保持している間だけ書き込まれます。
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_filter(build_env_filter(&config.log_level));

    let log_dir = if config.enable_file_logging {
        config.log_dir.clone().or_else(ConfigManager::default_log_dir)
    } else {
        None
    };

    let (file_layer, guard) = match log_dir.as_ref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(build_env_filter(&config.log_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(dir) = log_dir {
        tracing::debug!(log_dir = %dir.display(), "📝 File logging enabled");
    }

    Ok(guard)
}
