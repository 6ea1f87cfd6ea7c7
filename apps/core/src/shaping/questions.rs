//! Follow-up question bank.
//!
//! Picks one static bucket of three questions from the emotional tone of the
//! user's message. Keyword groups are tested in priority order and the first
//! hit wins, so "sad and anxious" gets the sad bucket.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Emotion keyword class selecting a question bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionClass {
    Sad,
    Anxious,
    Stressed,
    /// No keyword matched
    General,
}

// Unanchored substring match: "down" also hits "download" and "breakdown".
static SAD_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sad|depressed|down").expect("Invalid regex: sad keywords"));
static ANXIOUS_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)anxious|worried|nervous").expect("Invalid regex: anxious keywords")
});
static STRESSED_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)stressed|overwhelmed").expect("Invalid regex: stressed keywords")
});

const SAD_QUESTIONS: [&str; 3] = [
    "Can you tell me more about what's been making you feel this way?",
    "How long have you been feeling down?",
    "Is there something specific that happened recently that affected your mood?",
];

const ANXIOUS_QUESTIONS: [&str; 3] = [
    "What thoughts or situations have been making you feel anxious?",
    "When did you first start noticing these worries?",
    "How is this anxiety affecting your daily life?",
];

const STRESSED_QUESTIONS: [&str; 3] = [
    "What's the main source of stress for you right now?",
    "How have you been coping with everything on your plate?",
    "Is there one part of this that feels most overwhelming?",
];

const GENERAL_QUESTIONS: [&str; 3] = [
    "Could you share a bit more about what's going on?",
    "How long have you been feeling this way?",
    "What would feel most helpful to talk about right now?",
];

impl EmotionClass {
    /// Keyword classes in the order they are tested. `General` is the
    /// fallback and is not tested.
    pub const PRIORITY: [EmotionClass; 3] =
        [EmotionClass::Sad, EmotionClass::Anxious, EmotionClass::Stressed];

    fn keywords(&self) -> Option<&'static Regex> {
        match self {
            EmotionClass::Sad => Some(&*SAD_KEYWORDS),
            EmotionClass::Anxious => Some(&*ANXIOUS_KEYWORDS),
            EmotionClass::Stressed => Some(&*STRESSED_KEYWORDS),
            EmotionClass::General => None,
        }
    }

    /// Classifies `message` by the first keyword group it contains.
    pub fn detect(message: &str) -> EmotionClass {
        Self::PRIORITY
            .into_iter()
            .find(|class| class.keywords().is_some_and(|re| re.is_match(message)))
            .unwrap_or(EmotionClass::General)
    }

    /// The three questions for this bucket, in display order.
    pub fn questions(&self) -> [&'static str; 3] {
        match self {
            EmotionClass::Sad => SAD_QUESTIONS,
            EmotionClass::Anxious => ANXIOUS_QUESTIONS,
            EmotionClass::Stressed => STRESSED_QUESTIONS,
            EmotionClass::General => GENERAL_QUESTIONS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmotionClass::Sad => "sad",
            EmotionClass::Anxious => "anxious",
            EmotionClass::Stressed => "stressed",
            EmotionClass::General => "general",
        }
    }
}

impl fmt::Display for EmotionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns exactly three follow-up questions for `user_message`.
///
/// `context` is accepted for forward compatibility with a context-aware
/// generator; it is not inspected.
pub fn generate_follow_up_questions(user_message: &str, _context: &str) -> Vec<String> {
    EmotionClass::detect(user_message)
        .questions()
        .iter()
        .map(|q| q.to_string())
        .collect()
}
