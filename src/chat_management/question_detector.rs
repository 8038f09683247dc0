//! 質問検出
//!
//! `?` / `？` があれば即座に質問と判定します。それ以外は次の3条件をすべて満たす場合のみ質問とします。
//! - 4語以上
//! - 言語別の質問の書き出し + 空白で始まる
//! - 汎用パターン（助動詞・疑問詞・any系）のいずれかに一致

use super::lexicon::lexicon_for;
use super::QuestionType;
use regex::Regex;
use std::sync::OnceLock;

const MIN_QUESTION_WORDS: usize = 4;

/// 汎用の質問パターン
fn question_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"^(can|could|would|will|should|do|does|did|is|are|was|were|have|has|may|might)\b",
            r"^(what|when|where|why|who|whom|whose|which|how)\b",
            r"^(any|anyone|anybody)\b",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid question pattern"))
        .collect()
    })
}

/// 種別判定の優先順
const QUESTION_TYPE_RULES: &[(&str, QuestionType)] = &[
    ("how", QuestionType::HowTo),
    ("what", QuestionType::WhatIs),
    ("when", QuestionType::Timing),
    ("where", QuestionType::Location),
    ("why", QuestionType::Explanation),
    ("who", QuestionType::Person),
];

/// メッセージが質問かどうか
pub fn is_question(text: &str, language: &str) -> bool {
    if text.contains('?') || text.contains('？') {
        return true;
    }

    if text.split_whitespace().count() < MIN_QUESTION_WORDS {
        return false;
    }

    let normalized = text.trim().to_lowercase();

    let starts_with_starter = lexicon_for(language).is_some_and(|lexicon| {
        lexicon
            .question_starters
            .iter()
            .any(|starter| normalized.starts_with(&format!("{} ", starter)))
    });

    starts_with_starter
        && question_patterns()
            .iter()
            .any(|pattern| pattern.is_match(&normalized))
}

/// 質問の種類を判定（部分一致、優先順で最初にヒットしたもの）
pub fn question_type(text: &str) -> QuestionType {
    let lowered = text.to_lowercase();
    QUESTION_TYPE_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, question_type)| *question_type)
        .unwrap_or(QuestionType::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_mark_is_sufficient() {
        assert!(is_question("?", "english"));
        assert!(is_question("ok?", "english"));
        assert!(is_question("これは何？", "japanese"));
        assert!(is_question("lol?", "klingon"));
    }

    #[test]
    fn test_requires_four_words() {
        assert!(!is_question("how are you", "english"));
        assert!(is_question("how are you doing", "english"));
    }

    #[test]
    fn test_requires_starter_prefix() {
        // 疑問詞が先頭にない
        assert!(!is_question("tell me how you did that", "english"));
        // "how's" は "how " で始まらない
        assert!(!is_question("how's it going bro", "english"));
    }

    #[test]
    fn test_any_pattern() {
        assert!(is_question("anyone know the song name", "english"));
        assert!(is_question("any tips for this boss", "english"));
    }

    #[test]
    fn test_loose_prefix_still_counts() {
        // 内容的には質問でなくても、書き出しとパターンが揃えば質問扱い
        assert!(is_question("is this the real life", "english"));
        assert!(is_question("do it again streamer", "english"));
    }

    #[test]
    fn test_non_english_without_question_mark() {
        // 汎用パターンは英語の書き出しのみを想定しているため一致しない
        assert!(!is_question("como se llama esta cancion", "spanish"));
        assert!(is_question("como se llama esta cancion?", "spanish"));
    }

    #[test]
    fn test_unknown_language_without_question_mark() {
        assert!(!is_question("how do you do that", "klingon"));
    }

    #[test]
    fn test_question_type_priority() {
        assert_eq!(question_type("how do I improve my aim?"), QuestionType::HowTo);
        assert_eq!(question_type("what is that item?"), QuestionType::WhatIs);
        assert_eq!(question_type("when is the next stream?"), QuestionType::Timing);
        assert_eq!(question_type("where are you from?"), QuestionType::Location);
        assert_eq!(question_type("why did you skip it?"), QuestionType::Explanation);
        assert_eq!(question_type("who won?"), QuestionType::Person);
        assert_eq!(question_type("is this live?"), QuestionType::General);
        // "how" が "what" より優先
        assert_eq!(question_type("what and how?"), QuestionType::HowTo);
    }
}
