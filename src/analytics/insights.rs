//! 配信者向けインサイト文言の生成
//!
//! ルールは互いに独立しており、宣言順にすべて評価されます。

use crate::chat_management::Topic;
use std::collections::BTreeMap;

const POSITIVE_RATIO_THRESHOLD: f64 = 0.6;
const QUESTION_RATIO_THRESHOLD: f64 = 0.2;
const HIGH_SENTIMENT_THRESHOLD: f64 = 0.5;
const LOW_SENTIMENT_THRESHOLD: f64 = -0.2;
const UNIQUE_CHATTER_RATIO_THRESHOLD: f64 = 0.3;

/// インサイト生成に必要な集計値
#[derive(Debug, Clone, Copy)]
pub struct InsightInput<'a> {
    pub total_messages: usize,
    pub positive_messages: usize,
    pub questions_count: usize,
    pub avg_sentiment_score: f64,
    pub unique_chatters: usize,
    pub topics_discussed: &'a BTreeMap<Topic, usize>,
}

impl InsightInput<'_> {
    fn ratio(&self, count: usize) -> f64 {
        if self.total_messages == 0 {
            0.0
        } else {
            count as f64 / self.total_messages as f64
        }
    }

    /// 最も多く言及されたトピック（同数は分類順で先のもの）
    fn dominant_topic(&self) -> Option<(Topic, usize)> {
        self.topics_discussed
            .iter()
            .filter(|(_, count)| **count > 0)
            .fold(None, |best: Option<(Topic, usize)>, (topic, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((*topic, *count)),
            })
    }
}

type InsightRule = fn(&InsightInput<'_>) -> Option<String>;

const INSIGHT_RULES: &[InsightRule] = &[
    positive_ratio_insight,
    question_ratio_insight,
    dominant_topic_insight,
    sentiment_average_insight,
    community_reach_insight,
];

fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn positive_ratio_insight(input: &InsightInput<'_>) -> Option<String> {
    let ratio = input.ratio(input.positive_messages);
    (ratio > POSITIVE_RATIO_THRESHOLD).then(|| {
        format!(
            "{} of your chat was positive. Your community is loving this stream!",
            percent(ratio)
        )
    })
}

fn question_ratio_insight(input: &InsightInput<'_>) -> Option<String> {
    let ratio = input.ratio(input.questions_count);
    (ratio > QUESTION_RATIO_THRESHOLD).then(|| {
        format!(
            "Viewers asked {} questions ({} of messages). A dedicated Q&A segment could keep them engaged.",
            input.questions_count,
            percent(ratio)
        )
    })
}

fn dominant_topic_insight(input: &InsightInput<'_>) -> Option<String> {
    input.dominant_topic().map(|(topic, count)| {
        format!(
            "Chat talked about {} the most ({} mentions). Lean into it in your next stream.",
            topic, count
        )
    })
}

fn sentiment_average_insight(input: &InsightInput<'_>) -> Option<String> {
    let average = input.avg_sentiment_score;
    if average > HIGH_SENTIMENT_THRESHOLD {
        Some(format!(
            "Average sentiment of {:.2} shows strong positive energy in chat.",
            average
        ))
    } else if average < LOW_SENTIMENT_THRESHOLD {
        Some(format!(
            "Average sentiment of {:.2} suggests some frustration. Consider addressing viewer concerns.",
            average
        ))
    } else {
        None
    }
}

fn community_reach_insight(input: &InsightInput<'_>) -> Option<String> {
    let ratio = input.ratio(input.unique_chatters);
    (ratio > UNIQUE_CHATTER_RATIO_THRESHOLD).then(|| {
        format!(
            "{} different chatters joined the conversation. Your stream is reaching a broad audience.",
            input.unique_chatters
        )
    })
}

/// インサイト文言を生成
pub fn generate_insights(input: &InsightInput<'_>) -> Vec<String> {
    INSIGHT_RULES.iter().filter_map(|rule| rule(input)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(topics: &BTreeMap<Topic, usize>) -> InsightInput<'_> {
        InsightInput {
            total_messages: 10,
            positive_messages: 0,
            questions_count: 0,
            avg_sentiment_score: 0.0,
            unique_chatters: 1,
            topics_discussed: topics,
        }
    }

    #[test]
    fn test_no_insights() {
        let topics = BTreeMap::new();
        assert!(generate_insights(&input(&topics)).is_empty());
    }

    #[test]
    fn test_all_rules_in_order() {
        let mut topics = BTreeMap::new();
        topics.insert(Topic::Music, 4);
        topics.insert(Topic::Gaming, 2);

        let insights = generate_insights(&InsightInput {
            total_messages: 10,
            positive_messages: 7,
            questions_count: 3,
            avg_sentiment_score: 0.8,
            unique_chatters: 5,
            topics_discussed: &topics,
        });

        assert_eq!(insights.len(), 5);
        assert!(insights[0].starts_with("70%"));
        assert!(insights[1].contains("3 questions"));
        assert!(insights[2].contains("music"));
        assert!(insights[3].contains("0.80"));
        assert!(insights[4].starts_with("5 different chatters"));
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let topics = BTreeMap::new();
        let insights = generate_insights(&InsightInput {
            total_messages: 10,
            positive_messages: 6,
            questions_count: 2,
            avg_sentiment_score: 0.5,
            unique_chatters: 3,
            topics_discussed: &topics,
        });
        assert!(insights.is_empty());
    }

    #[test]
    fn test_negative_sentiment_insight() {
        let topics = BTreeMap::new();
        let mut data = input(&topics);
        data.avg_sentiment_score = -0.3;
        let insights = generate_insights(&data);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("frustration"));
    }

    #[test]
    fn test_dominant_topic_tie_prefers_taxonomy_order() {
        let mut topics = BTreeMap::new();
        topics.insert(Topic::Music, 3);
        topics.insert(Topic::Technical, 3);
        let insights = generate_insights(&input(&topics));
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("technical"));
    }
}
