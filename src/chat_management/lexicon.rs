//! 言語別の静的辞書
//!
//! 各言語のポジティブ/ネガティブ語、質問の書き出し、トピックキーワード、
//! およびゲーミングスラング（エモート）辞書を保持します。
//! 辞書は初回アクセス時に一度だけ構築され、以後は読み取り専用です。

use super::Topic;
use std::collections::HashMap;
use std::sync::OnceLock;

/// 1言語分の辞書
#[derive(Debug, Clone, Copy)]
pub struct LanguageLexicon {
    /// 言語名（`english` など）
    pub language: &'static str,
    pub positive_words: &'static [&'static str],
    pub negative_words: &'static [&'static str],
    /// 質問の書き出し（小文字）
    pub question_starters: &'static [&'static str],
    /// トピック別キーワード
    pub topic_keywords: &'static [(Topic, &'static [&'static str])],
}

/// 判定時の走査順。同点の場合はこの順で先に現れた言語が勝つ
pub static LANGUAGES: &[LanguageLexicon] = &[
    LanguageLexicon {
        language: "english",
        positive_words: &[
            "good", "great", "love", "awesome", "amazing", "nice", "cool", "lol", "lmao",
            "haha", "best", "beautiful", "excellent", "perfect", "fun", "happy", "thanks",
            "thank you", "wonderful", "fantastic", "brilliant", "sick", "fire", "legend",
            "incredible", "wholesome", "enjoy",
        ],
        negative_words: &[
            "bad", "hate", "trash", "terrible", "awful", "worst", "boring", "sucks", "lame",
            "annoying", "cringe", "sad", "ugly", "stupid", "garbage", "horrible", "disappointed",
            "toxic", "lag", "broken", "angry", "rigged",
        ],
        question_starters: &[
            "how", "what", "when", "where", "why", "who", "which", "can", "could", "would",
            "will", "should", "do", "does", "did", "is", "are", "was", "were", "have", "has",
            "any", "anyone", "anybody",
        ],
        topic_keywords: &[
            (
                Topic::Gaming,
                &[
                    "game", "play", "level", "boss", "build", "loadout", "rank", "ranked",
                    "match", "raid", "quest", "speedrun", "aim", "fps", "mmr", "patch",
                ],
            ),
            (
                Topic::Technical,
                &[
                    "setup", "pc", "gpu", "cpu", "specs", "mic", "camera", "obs", "keyboard",
                    "mouse", "monitor", "settings", "bitrate", "stream quality", "headset",
                ],
            ),
            (
                Topic::Personal,
                &[
                    "you doing", "your day", "life", "family", "birthday", "feel", "sleep",
                    "dog", "cat", "food", "weekend", "age", "where are you from",
                ],
            ),
            (
                Topic::Content,
                &[
                    "stream", "video", "clip", "youtube", "schedule", "content", "collab",
                    "vod", "highlight", "next time", "tomorrow",
                ],
            ),
            (
                Topic::Music,
                &[
                    "song", "music", "playlist", "track", "spotify", "beat", "artist", "album",
                    "bgm", "lyrics",
                ],
            ),
        ],
    },
    LanguageLexicon {
        language: "spanish",
        positive_words: &[
            "bueno", "genial", "increible", "excelente", "me encanta", "hermoso", "gracias",
            "jajaja", "crack", "bien", "mejor", "divertido", "perfecto",
        ],
        negative_words: &[
            "malo", "odio", "horrible", "aburrido", "peor", "feo", "triste", "basura",
            "terrible", "molesto",
        ],
        question_starters: &[
            "que", "qué", "como", "cómo", "cuando", "cuándo", "donde", "dónde", "por que",
            "por qué", "quien", "quién", "cual", "cuál", "puedes", "hay",
        ],
        topic_keywords: &[
            (Topic::Gaming, &["juego", "jugar", "partida", "nivel", "jefe"]),
            (Topic::Technical, &["configuracion", "configuración", "tarjeta grafica"]),
            (Topic::Personal, &["familia", "vida", "cumpleaños"]),
            (Topic::Content, &["directo", "contenido", "horario"]),
            (Topic::Music, &["canción", "cancion", "musica", "música"]),
        ],
    },
    LanguageLexicon {
        language: "portuguese",
        positive_words: &[
            "bom", "ótimo", "otimo", "incrível", "legal", "obrigado", "obrigada", "kkkk",
            "lindo", "maravilhoso", "demais", "top",
        ],
        negative_words: &["ruim", "odeio", "chato", "pior", "feio", "triste", "lixo", "horrível"],
        question_starters: &[
            "o que", "como", "quando", "onde", "por que", "porque", "quem", "qual", "pode",
            "alguém",
        ],
        topic_keywords: &[
            (Topic::Gaming, &["jogo", "jogar", "partida", "fase"]),
            (Topic::Technical, &["configuração", "placa de video", "microfone"]),
            (Topic::Personal, &["família", "familia", "aniversário"]),
            (Topic::Content, &["ao vivo", "conteúdo", "conteudo"]),
            (Topic::Music, &["música", "musica"]),
        ],
    },
    LanguageLexicon {
        language: "french",
        positive_words: &[
            "bon", "génial", "genial", "super", "excellent", "j'adore", "merci", "magnifique",
            "mdr", "parfait", "trop bien", "incroyable",
        ],
        negative_words: &[
            "mauvais", "nul", "déteste", "deteste", "ennuyeux", "pire", "triste", "horrible",
            "moche", "chiant",
        ],
        question_starters: &[
            "comment", "quoi", "quand", "où", "pourquoi", "qui", "quel", "quelle",
            "est-ce que", "est ce que", "peux",
        ],
        topic_keywords: &[
            (Topic::Gaming, &["jeu vidéo", "jouer", "niveau"]),
            (Topic::Technical, &["carte graphique", "paramètres"]),
            (Topic::Personal, &["famille", "anniversaire"]),
            (Topic::Content, &["contenu", "vidéo", "programme"]),
            (Topic::Music, &["chanson", "musique"]),
        ],
    },
    LanguageLexicon {
        language: "german",
        positive_words: &[
            "gut", "toll", "super", "geil", "danke", "schön", "schoen", "wunderbar", "klasse",
            "mega", "perfekt",
        ],
        negative_words: &[
            "schlecht", "hasse", "langweilig", "schlimm", "scheiße", "mies", "traurig",
            "hässlich", "nervig",
        ],
        question_starters: &[
            "wie", "was", "wann", "wo", "warum", "wer", "welche", "welcher", "kannst",
            "hast", "gibt",
        ],
        topic_keywords: &[
            (Topic::Gaming, &["spiel", "spielen", "runde"]),
            (Topic::Technical, &["einstellungen", "grafikkarte", "mikrofon"]),
            (Topic::Personal, &["familie", "geburtstag"]),
            (Topic::Content, &["inhalt", "zeitplan"]),
            (Topic::Music, &["lieder", "musik"]),
        ],
    },
    LanguageLexicon {
        language: "japanese",
        positive_words: &[
            "すごい", "最高", "かわいい", "可愛い", "ありがとう", "楽しい", "面白い", "草",
            "神", "ナイス", "好き", "うまい",
        ],
        negative_words: &["最悪", "つまらない", "嫌い", "ひどい", "残念", "悲しい", "うざい", "クソ"],
        question_starters: &["なに", "何", "どう", "いつ", "どこ", "なぜ", "誰"],
        topic_keywords: &[
            (Topic::Gaming, &["ゲーム", "ボス", "ランク"]),
            (Topic::Technical, &["設定", "マイク", "配信環境"]),
            (Topic::Personal, &["家族", "誕生日"]),
            (Topic::Content, &["配信", "動画", "切り抜き"]),
            (Topic::Music, &["曲", "歌", "音楽"]),
        ],
    },
    LanguageLexicon {
        language: "korean",
        positive_words: &["좋아", "최고", "대박", "감사", "고마워", "재밌", "귀여워", "ㅋㅋ"],
        negative_words: &["싫어", "최악", "노잼", "별로", "슬퍼", "짜증"],
        question_starters: &["뭐", "어떻게", "언제", "어디", "왜", "누구"],
        topic_keywords: &[
            (Topic::Gaming, &["게임", "보스"]),
            (Topic::Technical, &["설정", "마이크"]),
            (Topic::Personal, &["가족", "생일"]),
            (Topic::Content, &["방송", "영상"]),
            (Topic::Music, &["노래", "음악"]),
        ],
    },
    LanguageLexicon {
        language: "chinese",
        positive_words: &["好", "棒", "厉害", "喜欢", "谢谢", "哈哈", "牛", "可爱", "漂亮"],
        negative_words: &["差", "讨厌", "无聊", "垃圾", "难过", "烂"],
        question_starters: &["什么", "怎么", "为什么", "哪里", "谁", "什么时候"],
        topic_keywords: &[
            (Topic::Gaming, &["游戏", "打"]),
            (Topic::Technical, &["设置", "显卡", "麦克风"]),
            (Topic::Personal, &["家人", "生日"]),
            (Topic::Content, &["直播", "视频"]),
            (Topic::Music, &["歌", "音乐"]),
        ],
    },
    LanguageLexicon {
        language: "russian",
        positive_words: &["хорошо", "круто", "класс", "спасибо", "отлично", "люблю", "супер", "ахах"],
        negative_words: &["плохо", "ненавижу", "скучно", "ужасно", "отстой", "грустно"],
        question_starters: &["как", "что", "когда", "где", "почему", "кто", "какой"],
        topic_keywords: &[
            (Topic::Gaming, &["игра", "играть", "босс"]),
            (Topic::Technical, &["настройки", "микрофон", "видеокарта"]),
            (Topic::Personal, &["семья", "день рождения"]),
            (Topic::Content, &["стрим", "видео"]),
            (Topic::Music, &["песня", "музыка"]),
        ],
    },
    LanguageLexicon {
        language: "arabic",
        positive_words: &["جميل", "رائع", "شكرا", "ممتاز", "احب", "حلو"],
        negative_words: &["سيء", "اكره", "ممل", "حزين", "زفت"],
        question_starters: &["ماذا", "كيف", "متى", "أين", "لماذا", "من", "هل"],
        topic_keywords: &[
            (Topic::Gaming, &["لعبة", "العب"]),
            (Topic::Technical, &["اعدادات", "مايك"]),
            (Topic::Personal, &["عائلة", "عيد ميلاد"]),
            (Topic::Content, &["بث", "فيديو"]),
            (Topic::Music, &["اغنية", "موسيقى"]),
        ],
    },
    LanguageLexicon {
        language: "hindi",
        positive_words: &["अच्छा", "बढ़िया", "शानदार", "धन्यवाद", "प्यार", "मज़ा"],
        negative_words: &["बुरा", "बेकार", "नफरत", "उदास", "बोरिंग"],
        question_starters: &["क्या", "कैसे", "कब", "कहाँ", "क्यों", "कौन"],
        topic_keywords: &[
            (Topic::Gaming, &["गेम", "खेल"]),
            (Topic::Technical, &["सेटिंग", "माइक"]),
            (Topic::Personal, &["परिवार", "जन्मदिन"]),
            (Topic::Content, &["स्ट्रीम", "वीडियो"]),
            (Topic::Music, &["गाना", "संगीत"]),
        ],
    },
];

/// 言語非依存の卑語リスト（正規化済みトークンで照合）
pub static PROFANITY: &[&str] = &[
    "fuck", "fucking", "shit", "bitch", "asshole", "bastard", "dick", "crap", "damn", "wtf",
    "stfu", "mierda", "puta", "merde", "putain", "scheisse", "blyat", "cyka",
];

pub static POSITIVE_EMOJIS: &[&str] = &[
    "😀", "😃", "😄", "😁", "😂", "🤣", "😊", "😍", "🥰", "😎", "🔥", "❤️", "💯", "👍", "👏",
    "🎉", "🙌", "✨", "💪", "🏆",
];

pub static NEGATIVE_EMOJIS: &[&str] = &[
    "😢", "😭", "😞", "😔", "😠", "😡", "🤬", "👎", "💔", "😒", "🙄", "😤", "🤮", "😩",
];

/// エンゲージメント「high」判定用の盛り上がりワード（部分一致）
pub static HYPE_WORDS: &[&str] = &[
    "pog", "hype", "lets go", "let's go", "letsgo", "lfg", "omg", "insane", "clutch", "goat",
    "wow", "no way", "holy", "gg", "ez clap", "amazing", "incredible", "sheesh",
];

/// ゲーミングスラングの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlangCategory {
    Hype,
    Laughter,
    Win,
    Loss,
    Sadness,
    Tension,
    Boredom,
    Cope,
    Respect,
    Taunt,
}

impl SlangCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlangCategory::Hype => "hype",
            SlangCategory::Laughter => "laughter",
            SlangCategory::Win => "win",
            SlangCategory::Loss => "loss",
            SlangCategory::Sadness => "sadness",
            SlangCategory::Tension => "tension",
            SlangCategory::Boredom => "boredom",
            SlangCategory::Cope => "cope",
            SlangCategory::Respect => "respect",
            SlangCategory::Taunt => "taunt",
        }
    }
}

/// スラング辞書のエントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlangEntry {
    /// 極性（-1, 0, 1）
    pub score: i8,
    pub category: SlangCategory,
}

const GAMING_SLANG: &[(&str, i8, SlangCategory)] = &[
    ("pog", 1, SlangCategory::Hype),
    ("poggers", 1, SlangCategory::Hype),
    ("pogchamp", 1, SlangCategory::Hype),
    ("pogu", 1, SlangCategory::Hype),
    ("hypers", 1, SlangCategory::Hype),
    ("sheesh", 1, SlangCategory::Hype),
    ("w", 1, SlangCategory::Win),
    ("dub", 1, SlangCategory::Win),
    ("gg", 1, SlangCategory::Win),
    ("ggwp", 1, SlangCategory::Win),
    ("kekw", 1, SlangCategory::Laughter),
    ("lul", 1, SlangCategory::Laughter),
    ("lulw", 1, SlangCategory::Laughter),
    ("omegalul", 1, SlangCategory::Laughter),
    ("kappa", 0, SlangCategory::Laughter),
    ("5head", 1, SlangCategory::Respect),
    ("goated", 1, SlangCategory::Respect),
    ("f", 0, SlangCategory::Respect),
    ("o7", 0, SlangCategory::Respect),
    ("l", -1, SlangCategory::Loss),
    ("ratio", -1, SlangCategory::Loss),
    ("throw", -1, SlangCategory::Loss),
    ("sadge", -1, SlangCategory::Sadness),
    ("pepehands", -1, SlangCategory::Sadness),
    ("biblethump", -1, SlangCategory::Sadness),
    ("monkas", 0, SlangCategory::Tension),
    ("monkaw", 0, SlangCategory::Tension),
    ("residentsleeper", -1, SlangCategory::Boredom),
    ("notlikethis", -1, SlangCategory::Boredom),
    ("copium", 0, SlangCategory::Cope),
    ("hopium", 0, SlangCategory::Cope),
    ("ez", 0, SlangCategory::Taunt),
    ("4head", 0, SlangCategory::Taunt),
];

static SLANG_DICTIONARY: OnceLock<HashMap<&'static str, SlangEntry>> = OnceLock::new();

/// ゲーミングスラング辞書を取得（初回のみ構築）
pub fn gaming_slang() -> &'static HashMap<&'static str, SlangEntry> {
    SLANG_DICTIONARY.get_or_init(|| {
        GAMING_SLANG
            .iter()
            .map(|&(token, score, category)| (token, SlangEntry { score, category }))
            .collect()
    })
}

/// 正規化済みトークンでスラング辞書を引く
pub fn lookup_slang(normalized: &str) -> Option<SlangEntry> {
    gaming_slang().get(normalized).copied()
}

/// 言語名で辞書を取得
pub fn lexicon_for(language: &str) -> Option<&'static LanguageLexicon> {
    LANGUAGES.iter().find(|lexicon| lexicon.language == language)
}

/// トークン正規化: 英数字以外を除去して小文字化
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("W!!!!"), "w");
        assert_eq!(normalize_token("KEKW"), "kekw");
        assert_eq!(normalize_token("5Head."), "5head");
        assert_eq!(normalize_token("???"), "");
    }

    #[test]
    fn test_slang_lookup() {
        let pog = lookup_slang("pog").unwrap();
        assert_eq!(pog.score, 1);
        assert_eq!(pog.category, SlangCategory::Hype);

        assert_eq!(lookup_slang("l").unwrap().score, -1);
        assert_eq!(lookup_slang("monkas").unwrap().score, 0);
        assert!(lookup_slang("hello").is_none());
    }

    #[test]
    fn test_language_order_starts_with_english() {
        assert_eq!(LANGUAGES[0].language, "english");
        assert!(lexicon_for("japanese").is_some());
        assert!(lexicon_for("klingon").is_none());
    }

    #[test]
    fn test_every_language_covers_all_topics() {
        for lexicon in LANGUAGES {
            for topic in Topic::ALL {
                assert!(
                    lexicon.topic_keywords.iter().any(|(t, _)| *t == topic),
                    "{} is missing {:?}",
                    lexicon.language,
                    topic
                );
            }
        }
    }

    #[test]
    fn test_profanity_disjoint_from_negative_words() {
        for lexicon in LANGUAGES {
            for word in PROFANITY {
                assert!(!lexicon.negative_words.contains(word));
            }
        }
    }
}
