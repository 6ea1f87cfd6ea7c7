//! Response shaper - facade over both shaping pipelines.
//!
//! The chat layer calls [`ResponseShaper::assess`] before sending a user
//! message to the model and [`ResponseShaper::structure`] on the model's
//! reply. The two pipelines share no state.

use std::time::Instant;
use tracing::debug;

use super::structurer::{ResponseStructurer, StructuredResponse};
use super::sufficiency::{SufficiencyClassifier, SufficiencyResult};
use crate::config::ShaperConfig;

/// Bundles a sufficiency classifier and a response structurer
#[derive(Debug, Clone, Default)]
pub struct ResponseShaper {
    classifier: SufficiencyClassifier,
    structurer: ResponseStructurer,
}

impl ResponseShaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ShaperConfig) -> Self {
        Self {
            classifier: SufficiencyClassifier::from_config(config),
            structurer: ResponseStructurer::new(),
        }
    }

    pub fn with_parts(classifier: SufficiencyClassifier, structurer: ResponseStructurer) -> Self {
        Self {
            classifier,
            structurer,
        }
    }

    pub fn classifier(&self) -> &SufficiencyClassifier {
        &self.classifier
    }

    /// Decides whether `user_message` needs clarification before answering.
    pub fn assess(&self, user_message: &str, context: &str) -> SufficiencyResult {
        let start = Instant::now();
        let result = self.classifier.assess(user_message, context);

        debug!(
            needs_more_info = result.needs_more_info,
            message_chars = user_message.chars().count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Assessed message sufficiency"
        );

        result
    }

    /// Splits a model reply into labeled sections.
    pub fn structure(&self, response: &str) -> StructuredResponse {
        let start = Instant::now();
        let structured = self.structurer.format(response);

        debug!(
            acknowledgment = !structured.acknowledgment.is_empty(),
            insights = !structured.insights.is_empty(),
            suggestions = !structured.suggestions.is_empty(),
            resources = !structured.resources.is_empty(),
            follow_up = !structured.follow_up.is_empty(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Structured reply"
        );

        structured
    }
}
