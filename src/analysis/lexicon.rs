//! Static keyword tables for sentiment and theme analysis.
//!
//! Each lexicon carries its own [`MatchMode`]. Sentiment words must equal a
//! token exactly, while theme keywords only need to appear inside a token so
//! that inflections ("working", "workout") still count. Tokens are produced
//! by lowercasing the text and splitting on whitespace; punctuation is kept,
//! so `"happy."` does not match the sentiment word `happy`.

use super::sentiment::SentimentLabel;
use super::themes::Theme;

/// How a token is compared against a lexicon keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The token must equal the keyword.
    Exact,
    /// The token must contain the keyword.
    Substring,
}

impl MatchMode {
    pub fn matches(self, token: &str, keyword: &str) -> bool {
        match self {
            MatchMode::Exact => token == keyword,
            MatchMode::Substring => token.contains(keyword),
        }
    }
}

/// A static mapping from category to trigger words.
#[derive(Debug)]
pub struct Lexicon<C: 'static> {
    pub mode: MatchMode,
    pub categories: &'static [(C, &'static [&'static str])],
}

impl<C: Copy + PartialEq> Lexicon<C> {
    /// Keywords declared for `category`, or an empty slice.
    pub fn keywords(&self, category: C) -> &'static [&'static str] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }

    /// The first category (in declaration order) with a keyword matching `token`.
    pub fn lookup(&self, token: &str) -> Option<C> {
        self.categories
            .iter()
            .find(|(_, words)| words.iter().any(|word| self.mode.matches(token, word)))
            .map(|(category, _)| *category)
    }
}

/// Lowercases `text` for tokenizing with `split_whitespace`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

pub static SENTIMENT_LEXICON: Lexicon<SentimentLabel> = Lexicon {
    mode: MatchMode::Exact,
    categories: &[
        (
            SentimentLabel::Positive,
            &[
                "happy", "joy", "excited", "grateful", "blessed", "amazing", "wonderful",
                "fantastic", "great", "excellent", "love", "adore", "enjoy", "pleasure",
                "delight", "thrilled", "proud", "accomplished", "success", "achievement",
                "progress", "growth", "improvement", "peaceful", "calm", "relaxed", "content",
                "satisfied", "fulfilled", "optimistic", "hopeful", "confident", "strong",
                "energized", "motivated", "inspired", "creative",
            ],
        ),
        (
            SentimentLabel::Negative,
            &[
                "sad", "depressed", "down", "upset", "angry", "frustrated", "annoyed",
                "irritated", "worried", "anxious", "stressed", "overwhelmed", "tired",
                "exhausted", "drained", "lonely", "isolated", "hurt", "pain", "suffering",
                "struggle", "difficult", "hard", "challenging", "problem", "issue", "concern",
                "fear", "scared", "afraid", "nervous", "disappointed", "discouraged",
                "hopeless", "helpless", "lost", "confused", "stuck",
            ],
        ),
        (
            SentimentLabel::Neutral,
            &[
                "okay", "fine", "normal", "regular", "usual", "typical", "average", "standard",
                "work", "job", "meeting", "appointment", "plan", "schedule", "routine", "daily",
                "today", "yesterday", "tomorrow", "week", "month", "year", "time", "date",
            ],
        ),
    ],
};

pub static THEME_LEXICON: Lexicon<Theme> = Lexicon {
    mode: MatchMode::Substring,
    categories: &[
        (
            Theme::Work,
            &[
                "work", "job", "career", "office", "meeting", "project", "boss", "colleague",
                "deadline", "presentation",
            ],
        ),
        (
            Theme::Family,
            &[
                "family", "mom", "dad", "parent", "sibling", "brother", "sister", "child", "kid",
                "son", "daughter",
            ],
        ),
        (
            Theme::Relationships,
            &[
                "relationship", "partner", "boyfriend", "girlfriend", "spouse", "husband",
                "wife", "friend", "dating",
            ],
        ),
        (
            Theme::Health,
            &[
                "health", "exercise", "workout", "gym", "doctor", "medical", "sick", "illness",
                "medicine", "fitness",
            ],
        ),
        (
            Theme::Hobbies,
            &[
                "hobby", "hobbies", "music", "art", "reading", "writing", "gaming", "sports",
                "cooking", "travel",
            ],
        ),
        (
            Theme::Education,
            &[
                "school", "college", "university", "study", "learning", "class", "course",
                "exam", "test", "homework",
            ],
        ),
        (
            Theme::Travel,
            &[
                "travel", "trip", "vacation", "holiday", "flight", "hotel", "destination",
                "journey", "adventure",
            ],
        ),
        (
            Theme::Finance,
            &[
                "money", "budget", "expense", "income", "salary", "investment", "saving",
                "spending", "financial",
            ],
        ),
    ],
};
