use super::{ExportError, FormatHandler, SessionAnalytics};

/// JSON形式エクスポーター
pub struct JsonExporter {
    pretty_print: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// 文字列として出力
    pub fn to_json_string(&self, analytics: &SessionAnalytics) -> Result<String, ExportError> {
        let bytes = self.export(analytics)?;
        String::from_utf8(bytes).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

impl FormatHandler for JsonExporter {
    fn export(&self, analytics: &SessionAnalytics) -> Result<Vec<u8>, ExportError> {
        let json_bytes = if self.pretty_print {
            serde_json::to_vec_pretty(analytics)
        } else {
            serde_json::to_vec(analytics)
        }
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

        Ok(json_bytes)
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{aggregate_session, StoredMessage};
    use crate::chat_management::{analyze_message, Tier};
    use chrono::{TimeZone, Utc};

    fn create_test_analytics() -> SessionAnalytics {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        let messages: Vec<StoredMessage> = ["pog!!", "what song is this?", "great stream"]
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let classified = analyze_message(text, Some(Tier::Pro));
                StoredMessage::new(
                    format!("user{}", i),
                    *text,
                    start + chrono::Duration::seconds(i as i64 * 30),
                )
                .with_classification(&classified)
            })
            .collect();
        aggregate_session(&messages).unwrap()
    }

    #[test]
    fn test_json_export_uses_camel_case() {
        let exporter = JsonExporter::new().with_pretty_print(false);
        let json = exporter.to_json_string(&create_test_analytics()).unwrap();

        assert!(json.contains("\"totalMessages\":3"));
        assert!(json.contains("\"engagementPeaks\""));
        assert!(json.contains("\"mostActiveChatters\""));
        assert!(json.contains("\"music\":1"));
    }

    #[test]
    fn test_pretty_print_is_valid_json() {
        let bytes = JsonExporter::new().export(&create_test_analytics()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["totalMessages"], 3);
        assert_eq!(value["mostActiveChatters"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        JsonExporter::new()
            .export_to_file(&create_test_analytics(), &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("motivationalInsights"));
    }
}
