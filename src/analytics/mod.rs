pub mod export;
pub mod insights;
pub mod session_analyzer;

pub use export::*;
pub use insights::*;
pub use session_analyzer::*;

use thiserror::Error;

/// 分析エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// メッセージが1件もないセッションは集計できない
    #[error("Cannot generate analytics for a session with no messages")]
    EmptySession,
}
