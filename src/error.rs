//! ファイル入出力と分析処理のエラー型

use crate::analytics::AnalyticsError;
use thiserror::Error;

/// Comprehensive error types for file I/O and analytics.
#[derive(Error, Debug)]
pub enum ChatPulseError {
    /// I/O error when reading or writing files
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error at line {line}: {source}")]
    JsonParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    /// Empty or invalid data
    #[error("No valid data found: {context}")]
    NoData { context: String },

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Generic error with context
    #[error("Error in {context}: {message}")]
    Generic { context: String, message: String },
}

impl ChatPulseError {
    /// Create a new generic error with context
    pub fn generic(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generic {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a no data error
    pub fn no_data(context: impl Into<String>) -> Self {
        Self::NoData {
            context: context.into(),
        }
    }
}

pub type ChatPulseResult<T> = Result<T, ChatPulseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = ChatPulseError::generic("reading input", "boom");
        assert_eq!(error.to_string(), "Error in reading input: boom");

        let error = ChatPulseError::no_data("session.ndjson");
        assert_eq!(error.to_string(), "No valid data found: session.ndjson");

        let error: ChatPulseError = AnalyticsError::EmptySession.into();
        assert!(error.to_string().contains("no messages"));
    }
}
