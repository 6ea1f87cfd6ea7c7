//! Response structuring.
//!
//! Splits a freeform reply into labeled sections for the UI. Each section is
//! filled independently from its own ordered rule list; sections may overlap
//! and nothing is deduplicated. A separate post-pass copies the whole reply
//! into `insights` when no primary section matched.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::patterns::{default_response_rules, rules_for, PatternRule, Section};

/// Reply split into labeled sections. Unmatched sections are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResponse {
    pub acknowledgment: String,
    pub insights: String,
    pub suggestions: String,
    pub resources: String,
    pub follow_up: String,
}

impl StructuredResponse {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Acknowledgment => &self.acknowledgment,
            Section::Insights => &self.insights,
            Section::Suggestions => &self.suggestions,
            Section::Resources => &self.resources,
            Section::FollowUp => &self.follow_up,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Acknowledgment => &mut self.acknowledgment,
            Section::Insights => &mut self.insights,
            Section::Suggestions => &mut self.suggestions,
            Section::Resources => &mut self.resources,
            Section::FollowUp => &mut self.follow_up,
        }
    }

    /// True when every section is empty.
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.get(*s).is_empty())
    }

    /// True when no primary section (acknowledgment, insights, suggestions)
    /// has content.
    pub fn lacks_primary_content(&self) -> bool {
        Section::ALL
            .iter()
            .filter(|s| s.is_primary())
            .all(|s| self.get(*s).is_empty())
    }
}

/// Structurer over an ordered rule table
#[derive(Debug, Clone)]
pub struct ResponseStructurer {
    rules: Vec<PatternRule>,
}

impl Default for ResponseStructurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseStructurer {
    /// Uses the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(default_response_rules())
    }

    /// Uses a custom table. Within a section, rules are tried in the order
    /// given; the order of sections in the table does not matter.
    ///
    /// A rule whose match trims to nothing (e.g. a pattern that can match
    /// only whitespace) counts as not matching, and the next rule for that
    /// section is tried. None of the built-in rules can produce such a match.
    pub fn with_rules(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// Matching pass only: fills each section from the first rule that
    /// matches anywhere in `response`. No fallback.
    pub fn match_sections(&self, response: &str) -> StructuredResponse {
        let mut structured = StructuredResponse::default();

        for section in Section::ALL {
            let hit = rules_for(&self.rules, section)
                .find_map(|rule| rule.extract(response).map(|text| (rule.name(), text)));

            if let Some((rule_name, text)) = hit {
                trace!(%section, rule = rule_name, "Section matched");
                *structured.slot_mut(section) = text.to_string();
            }
        }

        structured
    }

    /// Fallback pass: when no primary section matched, the whole trimmed
    /// reply becomes `insights`. Empty or whitespace-only replies stay empty.
    pub fn apply_fallback(mut structured: StructuredResponse, response: &str) -> StructuredResponse {
        let trimmed = response.trim();
        if structured.lacks_primary_content() && !trimmed.is_empty() {
            trace!("No primary section matched, using reply as insights");
            structured.insights = trimmed.to_string();
        }
        structured
    }

    /// Structures `response`: matching pass, then fallback.
    pub fn format(&self, response: &str) -> StructuredResponse {
        Self::apply_fallback(self.match_sections(response), response)
    }
}

/// Structures `response` with the built-in rule table.
pub fn format_structured_response(response: &str) -> StructuredResponse {
    ResponseStructurer::new().format(response)
}
