//! セッション分析
//!
//! 保存済みメッセージ一覧から件数、感情平均、言語/トピック分布、
//! エンゲージメントのピーク区間、よく発言した視聴者、インサイト文言を算出します。

use super::{generate_insights, AnalyticsError, InsightInput};
use crate::chat_management::{
    analyze_message, ClassifiedMessage, EngagementLevel, Sentiment, Tier, Topic,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// ピーク判定の区間長（分）
pub const PEAK_WINDOW_MINUTES: i64 = 5;
/// ピークとして採用する強度の下限（これを超える区間のみ）
pub const PEAK_INTENSITY_THRESHOLD: f64 = 0.3;
pub const MAX_ENGAGEMENT_PEAKS: usize = 5;
pub const MAX_ACTIVE_CHATTERS: usize = 10;

/// 保存済みのチャットメッセージ
///
/// 分類結果の列は未分析の記録では空になります。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    pub username: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub is_question: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_level: Option<EngagementLevel>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl StoredMessage {
    /// 未分析のメッセージを作成
    pub fn new(
        username: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            message: message.into(),
            timestamp,
            language: None,
            sentiment: None,
            sentiment_score: None,
            is_question: false,
            engagement_level: None,
            topics: Vec::new(),
        }
    }

    /// 分類結果を列に反映
    pub fn with_classification(mut self, classified: &ClassifiedMessage) -> Self {
        self.language = Some(classified.language.clone());
        self.sentiment = Some(classified.sentiment);
        self.sentiment_score = Some(classified.sentiment_score);
        self.is_question = classified.is_question;
        self.engagement_level = Some(classified.engagement_level);
        self.topics = classified.topics.clone();
        self
    }

    /// 分類済みかどうか
    pub fn is_classified(&self) -> bool {
        self.sentiment.is_some()
    }

    fn is_positive(&self) -> bool {
        self.sentiment == Some(Sentiment::Positive)
    }

    fn is_high_engagement(&self) -> bool {
        self.engagement_level == Some(EngagementLevel::High)
    }
}

/// 未分類のメッセージを分析して列を埋める
pub fn classify_records(messages: Vec<StoredMessage>, tier: Option<Tier>) -> Vec<StoredMessage> {
    messages
        .into_iter()
        .map(|record| {
            if record.is_classified() {
                record
            } else {
                let classified = analyze_message(&record.message, tier);
                record.with_classification(&classified)
            }
        })
        .collect()
}

/// エンゲージメントのピーク区間
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngagementPeak {
    /// 区間の開始時刻
    pub timestamp: DateTime<Utc>,
    pub intensity: f64,
    pub message_count: usize,
}

/// 視聴者別の発言統計
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatterStats {
    pub username: String,
    pub count: usize,
    pub sentiment_avg: f64,
}

/// セッション分析結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionAnalytics {
    pub total_messages: usize,
    pub questions_count: usize,
    pub positive_messages: usize,
    pub negative_messages: usize,
    pub neutral_messages: usize,
    pub high_engagement_messages: usize,
    pub avg_sentiment_score: f64,
    pub languages_detected: BTreeMap<String, usize>,
    pub topics_discussed: BTreeMap<Topic, usize>,
    pub engagement_peaks: Vec<EngagementPeak>,
    pub most_active_chatters: Vec<ChatterStats>,
    pub motivational_insights: Vec<String>,
}

/// 小数点以下2桁に丸める
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 区間ごとの集計
#[derive(Debug, Default, Clone, Copy)]
struct WindowTally {
    count: usize,
    high_engagement: usize,
    positive: usize,
    questions: usize,
}

impl WindowTally {
    fn intensity(&self) -> f64 {
        let count = self.count as f64;
        (count * 0.4
            + self.high_engagement as f64 * 0.4
            + self.positive as f64 * 0.15
            + self.questions as f64 * 0.05)
            / count
    }
}

/// 視聴者別の集計（初出順を保持）
#[derive(Debug)]
struct ChatterTally {
    username: String,
    count: usize,
    score_sum: f64,
    scored: usize,
}

/// セッション全体を集計
pub fn aggregate_session(messages: &[StoredMessage]) -> Result<SessionAnalytics, AnalyticsError> {
    if messages.is_empty() {
        return Err(AnalyticsError::EmptySession);
    }

    let mut questions_count = 0;
    let mut positive_messages = 0;
    let mut negative_messages = 0;
    let mut neutral_messages = 0;
    let mut high_engagement_messages = 0;
    let mut score_sum = 0.0;
    let mut scored = 0usize;
    let mut languages_detected: BTreeMap<String, usize> = BTreeMap::new();
    let mut topics_discussed: BTreeMap<Topic, usize> = BTreeMap::new();

    for message in messages {
        if message.is_question {
            questions_count += 1;
        }
        match message.sentiment {
            Some(Sentiment::Positive) => positive_messages += 1,
            Some(Sentiment::Negative) => negative_messages += 1,
            // 未分類のメッセージは中立として数える
            Some(Sentiment::Neutral) | None => neutral_messages += 1,
        }
        if message.is_high_engagement() {
            high_engagement_messages += 1;
        }
        if let Some(score) = message.sentiment_score {
            score_sum += score;
            scored += 1;
        }
        if let Some(language) = &message.language {
            *languages_detected.entry(language.clone()).or_insert(0) += 1;
        }
        for topic in &message.topics {
            *topics_discussed.entry(*topic).or_insert(0) += 1;
        }
    }

    let avg_sentiment_score = if scored > 0 {
        round2(score_sum / scored as f64)
    } else {
        0.0
    };

    let engagement_peaks = detect_engagement_peaks(messages);
    let chatters = rank_chatters(messages);
    let unique_chatters = chatters.len();
    let most_active_chatters: Vec<ChatterStats> =
        chatters.into_iter().take(MAX_ACTIVE_CHATTERS).collect();

    let total_messages = messages.len();
    let motivational_insights = generate_insights(&InsightInput {
        total_messages,
        positive_messages,
        questions_count,
        avg_sentiment_score,
        unique_chatters,
        topics_discussed: &topics_discussed,
    });

    info!(
        total_messages,
        unique_chatters,
        peaks = engagement_peaks.len(),
        avg_sentiment_score,
        "📊 Session analytics generated"
    );

    Ok(SessionAnalytics {
        total_messages,
        questions_count,
        positive_messages,
        negative_messages,
        neutral_messages,
        high_engagement_messages,
        avg_sentiment_score,
        languages_detected,
        topics_discussed,
        engagement_peaks,
        most_active_chatters,
        motivational_insights,
    })
}

/// 最初のメッセージから5分区間に分割し、強度の高い区間を抽出
pub fn detect_engagement_peaks(messages: &[StoredMessage]) -> Vec<EngagementPeak> {
    let Some(first) = messages.iter().map(|m| m.timestamp).min() else {
        return Vec::new();
    };
    let window_seconds = Duration::minutes(PEAK_WINDOW_MINUTES).num_seconds();

    let mut windows: BTreeMap<i64, WindowTally> = BTreeMap::new();
    for message in messages {
        let index = (message.timestamp - first).num_seconds() / window_seconds;
        let tally = windows.entry(index).or_default();
        tally.count += 1;
        if message.is_high_engagement() {
            tally.high_engagement += 1;
        }
        if message.is_positive() {
            tally.positive += 1;
        }
        if message.is_question {
            tally.questions += 1;
        }
    }

    let mut peaks: Vec<EngagementPeak> = windows
        .into_iter()
        .filter_map(|(index, tally)| {
            let intensity = tally.intensity();
            (intensity > PEAK_INTENSITY_THRESHOLD).then(|| EngagementPeak {
                timestamp: first + Duration::seconds(index * window_seconds),
                intensity: round2(intensity),
                message_count: tally.count,
            })
        })
        .collect();

    // 同じ強度の場合は時刻順（安定ソート）
    peaks.sort_by(|a, b| {
        b.intensity
            .partial_cmp(&a.intensity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    peaks.truncate(MAX_ENGAGEMENT_PEAKS);

    debug!(peaks = peaks.len(), "engagement peaks detected");
    peaks
}

/// 発言数の多い順に視聴者を並べる（同数は初出順）
fn rank_chatters(messages: &[StoredMessage]) -> Vec<ChatterStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<ChatterTally> = Vec::new();

    for message in messages {
        let position = *index.entry(message.username.as_str()).or_insert_with(|| {
            tallies.push(ChatterTally {
                username: message.username.clone(),
                count: 0,
                score_sum: 0.0,
                scored: 0,
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[position];
        tally.count += 1;
        if let Some(score) = message.sentiment_score {
            tally.score_sum += score;
            tally.scored += 1;
        }
    }

    let mut chatters: Vec<ChatterStats> = tallies
        .into_iter()
        .map(|tally| ChatterStats {
            sentiment_avg: if tally.scored > 0 {
                round2(tally.score_sum / tally.scored as f64)
            } else {
                0.0
            },
            username: tally.username,
            count: tally.count,
        })
        .collect();

    chatters.sort_by(|a, b| b.count.cmp(&a.count));
    chatters
}
