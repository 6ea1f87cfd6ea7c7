//! Input sufficiency classification.
//!
//! Decides whether a user message carries enough detail to answer, before it
//! is sent to the language model. Three independent checks run on every call
//! and their results are OR-combined:
//! 1. length of the trimmed message
//! 2. whole-message match against vague emotional statements
//! 3. whole-message match against context-free event statements

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{lacking_detail_rules, vague_rules, SufficiencyKind};
use super::questions::generate_follow_up_questions;
use crate::config::{ShaperConfig, DEFAULT_MIN_MESSAGE_CHARS};

/// A check that flagged the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsufficiencyReason {
    TooShort,
    Vague,
    LackingDetail,
}

impl From<SufficiencyKind> for InsufficiencyReason {
    fn from(kind: SufficiencyKind) -> Self {
        match kind {
            SufficiencyKind::Vague => InsufficiencyReason::Vague,
            SufficiencyKind::LackingDetail => InsufficiencyReason::LackingDetail,
        }
    }
}

/// Result of sufficiency classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SufficiencyResult {
    /// Whether the user should be asked for more detail first
    pub needs_more_info: bool,
    /// Present only when `needs_more_info` is true; always three questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
    /// Every check that fired, in evaluation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<InsufficiencyReason>,
}

impl SufficiencyResult {
    fn sufficient() -> Self {
        Self {
            needs_more_info: false,
            follow_up_questions: None,
            reasons: vec![],
        }
    }
}

/// Sufficiency classifier
#[derive(Debug, Clone)]
pub struct SufficiencyClassifier {
    min_chars: usize,
}

impl Default for SufficiencyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SufficiencyClassifier {
    pub fn new() -> Self {
        Self::with_min_chars(DEFAULT_MIN_MESSAGE_CHARS)
    }

    pub fn with_min_chars(min_chars: usize) -> Self {
        Self { min_chars }
    }

    pub fn from_config(config: &ShaperConfig) -> Self {
        Self::with_min_chars(config.min_message_chars)
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Classifies `user_message`.
    ///
    /// Length is counted in characters of the trimmed message. Follow-up
    /// questions are generated from the untrimmed message. `context` is
    /// passed through to the question generator and otherwise unused.
    pub fn assess(&self, user_message: &str, context: &str) -> SufficiencyResult {
        let trimmed = user_message.trim();
        let mut reasons: Vec<InsufficiencyReason> = Vec::new();

        if trimmed.chars().count() < self.min_chars {
            reasons.push(InsufficiencyReason::TooShort);
        }

        for rules in [vague_rules(), lacking_detail_rules()] {
            if let Some(rule) = rules.iter().find(|rule| rule.matches(trimmed)) {
                reasons.push(rule.kind.into());
            }
        }

        if reasons.is_empty() {
            return SufficiencyResult::sufficient();
        }

        debug!(?reasons, "Message needs more information");

        SufficiencyResult {
            needs_more_info: true,
            follow_up_questions: Some(generate_follow_up_questions(user_message, context)),
            reasons,
        }
    }
}

/// Classifies `user_message` with the default 10-character threshold.
pub fn needs_more_information(user_message: &str, context: &str) -> SufficiencyResult {
    SufficiencyClassifier::new().assess(user_message, context)
}
