//! メッセージ分析のエントリポイント
//!
//! 言語推定、感情分析、質問検出、トピック/エンゲージメント判定をまとめて実行します。
//! 感情分析は推定された言語を使い、質問種別は質問と判定された場合のみ求めます。

use super::{
    analyze_sentiment, detect_language, detect_topics, engagement_level, is_question,
    question_type, ClassifiedMessage, Tier,
};
use tracing::debug;

/// 1件のチャットメッセージを分析
pub fn analyze_message(text: &str, tier: Option<Tier>) -> ClassifiedMessage {
    let detection = detect_language(text);
    let sentiment = analyze_sentiment(text, &detection.language, tier);
    let is_question = is_question(text, &detection.language);
    let question_type = is_question.then(|| question_type(text));
    let topics = detect_topics(text);
    let engagement_level = engagement_level(text);

    debug!(
        language = %detection.language,
        sentiment = sentiment.sentiment.as_str(),
        is_question,
        topics = topics.len(),
        "📨 Message classified"
    );

    ClassifiedMessage {
        language: detection.language,
        language_confidence: detection.confidence,
        is_question,
        question_type,
        sentiment: sentiment.sentiment,
        sentiment_score: sentiment.score,
        sentiment_reason: sentiment.reason,
        topics,
        engagement_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_management::{EngagementLevel, QuestionType, Sentiment, Topic};

    #[test]
    fn test_empty_message() {
        let result = analyze_message("", None);
        assert_eq!(result.language, "english");
        assert_eq!(result.language_confidence, 0.5);
        assert!(!result.is_question);
        assert!(result.question_type.is_none());
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.sentiment_score, 0.0);
        assert!(result.sentiment_reason.is_none());
        assert!(result.topics.is_empty());
        assert_eq!(result.engagement_level, EngagementLevel::Low);
    }

    #[test]
    fn test_hype_message_pro() {
        let result = analyze_message("W!!!!", Some(Tier::Pro));
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.sentiment_score, 1.0);
        assert!(result.sentiment_reason.unwrap().contains("w"));
        assert_eq!(result.engagement_level, EngagementLevel::Medium);
    }

    #[test]
    fn test_how_to_question() {
        let result = analyze_message("how do I improve my aim?", Some(Tier::Starter));
        assert!(result.is_question);
        assert_eq!(result.question_type, Some(QuestionType::HowTo));
        assert_eq!(result.topics, vec![Topic::Gaming]);
    }

    #[test]
    fn test_question_type_only_for_questions() {
        let result = analyze_message("how cool", None);
        assert!(!result.is_question);
        assert!(result.question_type.is_none());
    }

    #[test]
    fn test_deterministic() {
        for text in ["pog pog", "this game is trash lol", "最高！", "anyone know the song"] {
            for tier in [None, Some(Tier::Starter), Some(Tier::Pro), Some(Tier::Agency)] {
                assert_eq!(analyze_message(text, tier), analyze_message(text, tier));
            }
        }
    }
}
