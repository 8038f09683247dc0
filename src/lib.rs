pub mod analytics;
pub mod chat_management;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;

// Re-export the main error types for convenience
pub use analytics::AnalyticsError;
pub use error::{ChatPulseError, ChatPulseResult};

// Re-export the two analysis entry points
pub use analytics::{aggregate_session, classify_records, SessionAnalytics, StoredMessage};
pub use chat_management::{analyze_message, ClassifiedMessage, Tier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_availability() {
        let classified: ClassifiedMessage = analyze_message("hello", Some(Tier::Agency));
        assert_eq!(classified.language, "english");

        let result: Result<SessionAnalytics, AnalyticsError> = aggregate_session(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_types_re_exported() {
        let error: ChatPulseError = AnalyticsError::EmptySession.into();
        assert!(matches!(error, ChatPulseError::Analytics(_)));
    }
}
