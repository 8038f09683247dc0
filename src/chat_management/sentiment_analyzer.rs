//! 多言語感情分析エンジン
//!
//! 処理順:
//! 1. ゲーミングスラング（Pro 以上のみ。最初にヒットしたトークンで即決定）
//! 2. 辞書スコア、卑語ペナルティ、絵文字、興奮表現（！連続・大文字・連続文字）を加算
//! 3. しきい値 ±0.5 で分類

use super::lexicon::{
    lexicon_for, lookup_slang, normalize_token, NEGATIVE_EMOJIS, POSITIVE_EMOJIS, PROFANITY,
};
use super::{Sentiment, Tier};
use std::sync::OnceLock;
use tracing::debug;

const POSITIVE_WORD_SCORE: f64 = 1.0;
const NEGATIVE_WORD_SCORE: f64 = -1.0;
const PROFANITY_SCORE: f64 = -2.0;
const EMOJI_SCORE: f64 = 0.5;
const EXCLAMATION_BONUS: f64 = 0.3;
const ALL_CAPS_BONUS: f64 = 0.2;
const REPEATED_CHAR_BONUS: f64 = 0.2;

const POSITIVE_THRESHOLD: f64 = 0.5;
const NEGATIVE_THRESHOLD: f64 = -0.5;

const ALL_CAPS_MIN_LENGTH: usize = 3;
const REPEAT_RUN_LENGTH: usize = 3;
const MAX_REASONS: usize = 2;

/// 感情分析結果
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    /// 各シグナルの合計値（上下限なし）
    pub score: f64,
    /// 寄与したシグナル（最大2件）
    pub reason: Option<String>,
}

fn exclamation_pattern() -> &'static regex::Regex {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| regex::Regex::new(r"[!！]{2,}").expect("valid exclamation pattern"))
}

/// 感情スコアを積み上げるための作業領域
#[derive(Debug, Default)]
struct ScoreBoard {
    score: f64,
    signals: Vec<String>,
}

impl ScoreBoard {
    fn add(&mut self, delta: f64, signal: String) {
        self.score += delta;
        self.signals.push(signal);
    }

    fn finish(self) -> SentimentAnalysis {
        let sentiment = classify_score(self.score);
        let reason = if self.signals.is_empty() {
            None
        } else {
            Some(
                self.signals
                    .into_iter()
                    .take(MAX_REASONS)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        };

        SentimentAnalysis {
            sentiment,
            score: self.score,
            reason,
        }
    }
}

/// しきい値による分類
pub fn classify_score(score: f64) -> Sentiment {
    if score > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// メッセージの感情を分析
pub fn analyze_sentiment(text: &str, language: &str, tier: Option<Tier>) -> SentimentAnalysis {
    let tier = tier.unwrap_or_default();

    if tier.gaming_slang_enabled() {
        if let Some(result) = gaming_slang_override(text) {
            debug!(tier = %tier, score = result.score, "gaming slang short-circuit");
            return result;
        }
    }

    let mut board = ScoreBoard::default();
    let lowered = text.to_lowercase();

    score_lexicon(&mut board, &lowered, language);
    score_profanity(&mut board, text);
    score_emojis(&mut board, text);
    score_excitement(&mut board, text);

    let result = board.finish();
    debug!(
        language,
        score = result.score,
        sentiment = result.sentiment.as_str(),
        "lexical sentiment"
    );
    result
}

/// 最初にスラング辞書にヒットしたトークンのみで決定する
fn gaming_slang_override(text: &str) -> Option<SentimentAnalysis> {
    text.split_whitespace().find_map(|token| {
        let normalized = normalize_token(token);
        if normalized.is_empty() {
            return None;
        }
        lookup_slang(&normalized).map(|entry| {
            let score = f64::from(entry.score);
            SentimentAnalysis {
                sentiment: Sentiment::from_sign(score),
                score,
                reason: Some(format!(
                    "gaming slang \"{}\" ({})",
                    normalized,
                    entry.category.as_str()
                )),
            }
        })
    })
}

fn score_lexicon(board: &mut ScoreBoard, lowered: &str, language: &str) {
    let Some(lexicon) = lexicon_for(language) else {
        return;
    };

    for word in lexicon.positive_words {
        if lowered.contains(word) {
            board.add(POSITIVE_WORD_SCORE, format!("positive word \"{}\"", word));
        }
    }
    for word in lexicon.negative_words {
        if lowered.contains(word) {
            board.add(NEGATIVE_WORD_SCORE, format!("negative word \"{}\"", word));
        }
    }
}

fn score_profanity(board: &mut ScoreBoard, text: &str) {
    for token in text.split_whitespace() {
        let normalized = normalize_token(token);
        if PROFANITY.contains(&normalized.as_str()) {
            board.add(PROFANITY_SCORE, format!("profanity \"{}\"", normalized));
        }
    }
}

fn score_emojis(board: &mut ScoreBoard, text: &str) {
    for emoji in POSITIVE_EMOJIS {
        if text.contains(emoji) {
            board.add(EMOJI_SCORE, format!("positive emoji {}", emoji));
        }
    }
    for emoji in NEGATIVE_EMOJIS {
        if text.contains(emoji) {
            board.add(-EMOJI_SCORE, format!("negative emoji {}", emoji));
        }
    }
}

fn score_excitement(board: &mut ScoreBoard, text: &str) {
    if exclamation_pattern().is_match(text) {
        board.add(EXCLAMATION_BONUS, "multiple exclamation marks".to_string());
    }

    if is_all_caps(text) {
        board.add(ALL_CAPS_BONUS, "all caps".to_string());
    }

    if has_repeated_chars(text) {
        board.add(REPEATED_CHAR_BONUS, "repeated characters".to_string());
    }
}

/// 大文字のみで構成された4文字以上のメッセージか
fn is_all_caps(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().count() > ALL_CAPS_MIN_LENGTH
        && trimmed.chars().any(char::is_uppercase)
        && !trimmed.chars().any(char::is_lowercase)
}

/// 同じ文字が3回以上連続しているか（"sooo", "!!!", "???"）
fn has_repeated_chars(text: &str) -> bool {
    let mut previous: Option<char> = None;
    let mut run = 0;

    for c in text.chars() {
        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run >= REPEAT_RUN_LENGTH {
            return true;
        }
    }
    false
}
