//! 言語推定
//!
//! 辞書ヒットと Unicode スクリプト判定のスコアで最も確からしい言語を選びます。

use super::lexicon::{LanguageLexicon, LANGUAGES};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 空文字列の場合の既定言語
pub const DEFAULT_LANGUAGE: &str = "english";
/// 空文字列の場合の既定信頼度
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

const MIN_CONFIDENCE: f64 = 0.3;
const MAX_CONFIDENCE: f64 = 0.9;

const QUESTION_STARTER_WEIGHT: f64 = 2.0;
const LEXICON_HIT_WEIGHT: f64 = 1.0;
const SCRIPT_MATCH_WEIGHT: f64 = 3.0;

/// 言語推定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetection {
    pub language: String,
    pub confidence: f64,
}

/// 文字種
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Cjk,
    Kana,
    Hangul,
    Arabic,
    Devanagari,
    Cyrillic,
}

impl Script {
    fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        match self {
            Script::Cjk => matches!(cp, 0x4E00..=0x9FFF | 0x3400..=0x4DBF),
            Script::Kana => matches!(cp, 0x3040..=0x309F | 0x30A0..=0x30FF),
            Script::Hangul => matches!(cp, 0xAC00..=0xD7AF | 0x1100..=0x11FF | 0x3130..=0x318F),
            Script::Arabic => matches!(cp, 0x0600..=0x06FF | 0x0750..=0x077F),
            Script::Devanagari => matches!(cp, 0x0900..=0x097F),
            Script::Cyrillic => matches!(cp, 0x0400..=0x04FF),
        }
    }

    /// 言語に対応する文字種
    fn for_language(language: &str) -> Option<Self> {
        match language {
            "chinese" => Some(Script::Cjk),
            "japanese" => Some(Script::Kana),
            "korean" => Some(Script::Hangul),
            "arabic" => Some(Script::Arabic),
            "hindi" => Some(Script::Devanagari),
            "russian" => Some(Script::Cyrillic),
            _ => None,
        }
    }
}

/// 句読点を除いて空白で分割したトークン
pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| !c.is_ascii_punctuation() && !is_fullwidth_punctuation(*c))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_fullwidth_punctuation(c: char) -> bool {
    matches!(c, '？' | '！' | '。' | '、' | '，' | '：' | '；' | '¿' | '¡')
}

/// 質問の書き出しの出現回数
///
/// 複数語の書き出し（"por que", "est-ce que"）はトークン列上の連続した語句として照合します。
fn count_starter(starter: &str, tokens: &[String], phrase: &str) -> usize {
    let starter_tokens = word_tokens(starter);
    match starter_tokens.as_slice() {
        [] => 0,
        [single] => tokens.iter().filter(|token| *token == single).count(),
        words => phrase.matches(&format!(" {} ", words.join(" "))).count(),
    }
}

fn score_language(
    lexicon: &LanguageLexicon,
    raw: &str,
    lowered: &str,
    tokens: &[String],
    phrase: &str,
) -> f64 {
    let starter_hits: usize = lexicon
        .question_starters
        .iter()
        .map(|starter| count_starter(starter, tokens, phrase))
        .sum();

    let lexicon_hits = lexicon
        .positive_words
        .iter()
        .chain(lexicon.negative_words.iter())
        .filter(|word| lowered.contains(*word))
        .count();

    let script_bonus = match Script::for_language(lexicon.language) {
        Some(script) if raw.chars().any(|c| script.contains(c)) => SCRIPT_MATCH_WEIGHT,
        _ => 0.0,
    };

    starter_hits as f64 * QUESTION_STARTER_WEIGHT
        + lexicon_hits as f64 * LEXICON_HIT_WEIGHT
        + script_bonus
}

/// メッセージの言語を推定
pub fn detect_language(text: &str) -> LanguageDetection {
    if text.trim().is_empty() {
        return LanguageDetection {
            language: DEFAULT_LANGUAGE.to_string(),
            confidence: DEFAULT_CONFIDENCE,
        };
    }

    let lowered = text.to_lowercase();
    let tokens = word_tokens(text);
    let word_count = tokens.len().max(1) as f64;
    // 語句照合用に前後を空白で囲む
    let phrase = format!(" {} ", tokens.join(" "));

    // 同点は走査順で先の言語を優先するため、厳密に大きい場合のみ更新
    let mut best = &LANGUAGES[0];
    let mut best_score = f64::MIN;
    for lexicon in LANGUAGES {
        let score = score_language(lexicon, text, &lowered, &tokens, &phrase);
        trace!(language = lexicon.language, score, "language score");
        if score > best_score {
            best = lexicon;
            best_score = score;
        }
    }

    let confidence = (best_score / word_count).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    LanguageDetection {
        language: best.language.to_string(),
        confidence,
    }
}
