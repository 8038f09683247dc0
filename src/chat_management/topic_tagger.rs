//! トピック抽出とエンゲージメント判定

use super::lexicon::{HYPE_WORDS, LANGUAGES};
use super::{EngagementLevel, Topic};

/// トピックを抽出（分類順、重複なし）
pub fn detect_topics(text: &str) -> Vec<Topic> {
    let lowered = text.to_lowercase();
    Topic::ALL
        .into_iter()
        .filter(|topic| topic_matches(*topic, &lowered))
        .collect()
}

fn topic_matches(topic: Topic, lowered: &str) -> bool {
    LANGUAGES
        .iter()
        .flat_map(|lexicon| lexicon.topic_keywords.iter())
        .filter(|(keyword_topic, _)| *keyword_topic == topic)
        .flat_map(|(_, keywords)| keywords.iter())
        .any(|keyword| lowered.contains(keyword))
}

/// エンゲージメント判定ルール（上から順に評価し、最初に一致したものを採用）
const ENGAGEMENT_RULES: &[(fn(&str) -> bool, EngagementLevel)] = &[
    (contains_hype_word, EngagementLevel::High),
    (contains_excited_punctuation, EngagementLevel::Medium),
];

fn contains_hype_word(lowered: &str) -> bool {
    HYPE_WORDS.iter().any(|word| lowered.contains(word))
}

fn contains_excited_punctuation(lowered: &str) -> bool {
    lowered.contains('!') || lowered.contains('?')
}

/// エンゲージメントレベルを判定
pub fn engagement_level(text: &str) -> EngagementLevel {
    let lowered = text.to_lowercase();
    ENGAGEMENT_RULES
        .iter()
        .find(|(predicate, _)| predicate(&lowered))
        .map(|(_, level)| *level)
        .unwrap_or(EngagementLevel::Low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_topic() {
        assert_eq!(detect_topics("this game is trash lol"), vec![Topic::Gaming]);
        assert_eq!(detect_topics("what song is this"), vec![Topic::Music]);
    }

    #[test]
    fn test_multiple_topics_in_taxonomy_order() {
        let topics = detect_topics("what GPU do you use to stream this game");
        assert_eq!(topics, vec![Topic::Gaming, Topic::Technical, Topic::Content]);
    }

    #[test]
    fn test_no_topics() {
        assert!(detect_topics("hi chat").is_empty());
        assert!(detect_topics("").is_empty());
    }

    #[test]
    fn test_multilingual_keywords() {
        assert_eq!(detect_topics("この曲いいね"), vec![Topic::Music]);
        assert_eq!(detect_topics("qué juego"), vec![Topic::Gaming]);
        assert_eq!(detect_topics("ao vivo hoje"), vec![Topic::Content]);
    }

    #[test]
    fn test_foreign_keywords_do_not_fire_inside_english_words() {
        assert!(detect_topics("he replied to me").is_empty());
        assert!(detect_topics("still alive").is_empty());
        assert!(detect_topics("microwave parties").is_empty());
    }

    #[test]
    fn test_engagement_priority() {
        // 盛り上がりワードが句読点より優先
        assert_eq!(engagement_level("POG"), EngagementLevel::High);
        assert_eq!(engagement_level("lets go!!"), EngagementLevel::High);
        assert_eq!(engagement_level("nice shot!"), EngagementLevel::Medium);
        assert_eq!(engagement_level("what map?"), EngagementLevel::Medium);
        assert_eq!(engagement_level("hello everyone"), EngagementLevel::Low);
        assert_eq!(engagement_level(""), EngagementLevel::Low);
    }
}
