use super::SessionAnalytics;
use std::path::Path;
use thiserror::Error;

pub mod json_exporter;

pub use json_exporter::JsonExporter;

/// エクスポートエラー
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("File access error: {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// フォーマットハンドラートレイト
pub trait FormatHandler: Send + Sync {
    fn export(&self, analytics: &SessionAnalytics) -> Result<Vec<u8>, ExportError>;

    /// ファイルへ書き出し
    fn export_to_file(&self, analytics: &SessionAnalytics, path: &Path) -> Result<(), ExportError> {
        let bytes = self.export(analytics)?;
        std::fs::write(path, bytes).map_err(|source| ExportError::FileAccess {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "💾 Session analytics exported");
        Ok(())
    }
}
