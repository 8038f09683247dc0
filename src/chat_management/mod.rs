pub mod language_detector;
pub mod lexicon;
pub mod message_classifier;
pub mod question_detector;
pub mod sentiment_analyzer;
pub mod topic_tagger;

pub use language_detector::*;
pub use message_classifier::*;
pub use question_detector::*;
pub use sentiment_analyzer::*;
pub use topic_tagger::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 契約プラン
///
/// ゲーミングスラングによる感情判定は Pro 以上でのみ有効です。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    #[default]
    Starter,
    Pro,
    Agency,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::Pro => "Pro",
            Tier::Agency => "Agency",
        }
    }

    /// ゲーミングスラング辞書による上書きが有効か
    pub fn gaming_slang_enabled(&self) -> bool {
        matches!(self, Tier::Pro | Tier::Agency)
    }

    /// 未知のラベルは最も制限の強い Starter として扱う
    pub fn parse_lenient(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!(tier = %label, "Unknown tier label, falling back to Starter");
            Tier::Starter
        })
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Tier::Starter),
            "pro" => Ok(Tier::Pro),
            "agency" => Ok(Tier::Agency),
            other => Err(format!("unknown tier: {}", other)),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 感情の分類
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// スコアの符号から分類（スラング判定用、しきい値なし）
    pub fn from_sign(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// 質問の種類
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    HowTo,
    WhatIs,
    Timing,
    Location,
    Explanation,
    Person,
    General,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::HowTo => "how-to",
            QuestionType::WhatIs => "what-is",
            QuestionType::Timing => "timing",
            QuestionType::Location => "location",
            QuestionType::Explanation => "explanation",
            QuestionType::Person => "person",
            QuestionType::General => "general",
        }
    }
}

/// 会話トピック（宣言順が出力順）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Gaming,
    Technical,
    Personal,
    Content,
    Music,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Gaming,
        Topic::Technical,
        Topic::Personal,
        Topic::Content,
        Topic::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Gaming => "gaming",
            Topic::Technical => "technical",
            Topic::Personal => "personal",
            Topic::Content => "content",
            Topic::Music => "music",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// エンゲージメントレベル
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    High,
    Medium,
    #[default]
    Low,
}

/// 1メッセージ分の分類結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedMessage {
    pub language: String,
    pub language_confidence: f64,
    pub is_question: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_reason: Option<String>,
    pub topics: Vec<Topic>,
    pub engagement_level: EngagementLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!("pro".parse::<Tier>(), Ok(Tier::Pro));
        assert_eq!(" Agency ".parse::<Tier>(), Ok(Tier::Agency));
        assert!("enterprise".parse::<Tier>().is_err());

        // 未知のプランは Starter 扱い
        assert_eq!(Tier::parse_lenient("enterprise"), Tier::Starter);
        assert_eq!(Tier::parse_lenient("PRO"), Tier::Pro);
    }

    #[test]
    fn test_tier_gating() {
        assert!(!Tier::Starter.gaming_slang_enabled());
        assert!(Tier::Pro.gaming_slang_enabled());
        assert!(Tier::Agency.gaming_slang_enabled());
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&QuestionType::HowTo).unwrap(),
            "\"how-to\""
        );
        assert_eq!(serde_json::to_string(&Topic::Music).unwrap(), "\"music\"");
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&EngagementLevel::High).unwrap(),
            "\"high\""
        );
    }

    #[test]
    fn test_sentiment_from_sign() {
        assert_eq!(Sentiment::from_sign(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_sign(-1.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_sign(0.0), Sentiment::Neutral);
    }
}
