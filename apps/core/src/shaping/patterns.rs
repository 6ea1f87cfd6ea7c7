//! Pattern tables for the shaping pipelines.
//!
//! Two kinds of data live here:
//! - response rules: ordered `(section, regex)` pairs used to carve a reply
//!   into labeled sections. Declaration order is priority within a section.
//! - sufficiency rules: whole-message regexes that flag a user message as
//!   vague or lacking detail.
//!
//! All patterns use the `regex` crate, which runs in linear time, so no rule
//! can backtrack catastrophically on hostile input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;

/// Name of the capture group holding the extracted text, when a rule needs
/// to anchor on context it should not return (e.g. the end of the previous
/// sentence).
pub const SPAN_GROUP: &str = "span";

/// Labeled section of a structured reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Validates the user's stated feeling
    Acknowledgment,
    /// Interpretation or context about the user's situation
    Insights,
    /// Actionable coping advice
    Suggestions,
    /// References to external help
    Resources,
    /// A question posed back to the user
    FollowUp,
}

impl Section {
    /// Every section, in the order the structurer fills them.
    pub const ALL: [Section; 5] = [
        Section::Acknowledgment,
        Section::Insights,
        Section::Suggestions,
        Section::Resources,
        Section::FollowUp,
    ];

    /// Returns the field name used in serialized output
    pub fn label(&self) -> &'static str {
        match self {
            Section::Acknowledgment => "acknowledgment",
            Section::Insights => "insights",
            Section::Suggestions => "suggestions",
            Section::Resources => "resources",
            Section::FollowUp => "followUp",
        }
    }

    /// Primary sections decide whether the insights fallback applies.
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            Section::Acknowledgment | Section::Insights | Section::Suggestions
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One ordered alternative for filling a section.
#[derive(Debug, Clone)]
pub struct PatternRule {
    section: Section,
    name: String,
    pattern: Regex,
}

impl PatternRule {
    /// Compiles a rule from a user-supplied pattern.
    ///
    /// If the pattern defines a `span` capture group, only that group is
    /// extracted; otherwise the whole match is.
    pub fn new(section: Section, name: impl Into<String>, pattern: &str) -> Result<Self, AppError> {
        Ok(Self {
            section,
            name: name.into(),
            pattern: Regex::new(pattern)?,
        })
    }

    // NOTE: panicking is acceptable here: built-in patterns are constants and
    // a typo is a bug that every test run catches.
    fn builtin(section: Section, name: &str, pattern: &str) -> Self {
        Self::new(section, name, pattern)
            .unwrap_or_else(|e| panic!("Invalid regex: {} ({})", name, e))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed text this rule extracts from `text`, if any.
    ///
    /// Only the leftmost match is considered. A match that trims to nothing
    /// counts as no match.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.pattern.captures(text)?;
        let matched = caps.name(SPAN_GROUP).or_else(|| caps.get(0))?;
        let trimmed = matched.as_str().trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

// Sentence start: a line start (after indentation) or the end of the
// previous sentence. The sentence itself is captured in `span`.
macro_rules! sentence {
    ($body:literal) => {
        concat!(
            r"(?im)(?:^[ \t]*|[.!?]\s+)(?P<span>",
            $body,
            ")"
        )
    };
}

static RESPONSE_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    use Section::*;
    vec![
        // Acknowledgment
        PatternRule::builtin(
            Acknowledgment,
            "ack_understand",
            sentence!(r"I (?:understand|hear you|can see|can imagine)\b[^.!?\n]*[.!?]?"),
        ),
        PatternRule::builtin(
            Acknowledgment,
            "ack_that_sounds",
            sentence!(r"(?:That|This) sounds\b[^.!?\n]*[.!?]?|(?:It['’]s|It is) (?:completely |totally )?understandable\b[^.!?\n]*[.!?]?"),
        ),
        PatternRule::builtin(
            Acknowledgment,
            "ack_sorry",
            sentence!(r"(?:I['’]m|I am) (?:so |really |truly )?sorry\b[^.!?\n]*[.!?]?|Thank you for sharing\b[^.!?\n]*[.!?]?"),
        ),
        // Insights
        PatternRule::builtin(
            Insights,
            "insight_it_sounds_like",
            sentence!(r"It (?:sounds|seems|looks) like\b[^.!?\n]*[.!?]?"),
        ),
        PatternRule::builtin(
            Insights,
            "insight_you_might_be",
            sentence!(r"You (?:might|may|could) be\b[^.!?\n]*[.!?]?"),
        ),
        PatternRule::builtin(
            Insights,
            "insight_common_experience",
            sentence!(r"(?:It['’]s|It is) (?:common|normal|natural)\b[^.!?\n]*[.!?]?|This (?:might|may|could) be\b[^.!?\n]*[.!?]?"),
        ),
        // Suggestions
        PatternRule::builtin(
            Suggestions,
            "suggest_you_could_try",
            sentence!(r"You (?:could|can|might) (?:try|consider)\b[^.!?\n]*[.!?]?"),
        ),
        PatternRule::builtin(
            Suggestions,
            "suggest_bullets",
            r"(?m)^[ \t]*•[ \t]+.*(?:\n[ \t]*•[ \t]+.*)*",
        ),
        PatternRule::builtin(
            Suggestions,
            "suggest_imperative",
            sentence!(r"(?:Try|Consider|It (?:might|may|could) help to)\b[^.!?\n]*[.!?]?"),
        ),
        // Resources
        PatternRule::builtin(
            Resources,
            "resource_header",
            r"(?im)^[ \t]*(?:#+[ \t]*)?\**(?:helpful )?resources?\b.*(?:\n[ \t]*[•*-][ \t]+.*)*",
        ),
        PatternRule::builtin(
            Resources,
            "resource_bullet",
            r"(?im)^[ \t]*[•*-][ \t]+.*\bresources?\b.*",
        ),
        PatternRule::builtin(
            Resources,
            "resource_helpline",
            sentence!(r"[^.!?\n]*\b(?:hotline|helpline|crisis (?:text )?line)\b[^.!?\n]*[.!?]?"),
        ),
        // Follow-up
        PatternRule::builtin(
            FollowUp,
            "follow_up_question_opener",
            sentence!(r"(?:How|What|Would|Do|Does|Can|Could|Have|Has|Is|Are|When|Where|Which|Who)\b[^.!?\n]*\?"),
        ),
        PatternRule::builtin(
            FollowUp,
            "follow_up_any_question",
            sentence!(r"[^.!?\n]*\?"),
        ),
    ]
});

/// Returns the built-in response rule table.
pub fn default_response_rules() -> Vec<PatternRule> {
    RESPONSE_RULES.clone()
}

/// Returns the rules for `section`, in priority order.
pub fn rules_for(rules: &[PatternRule], section: Section) -> impl Iterator<Item = &PatternRule> {
    rules.iter().filter(move |rule| rule.section == section)
}

/// Why a sufficiency rule flags a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SufficiencyKind {
    /// Generic emotional statement with nothing to act on
    Vague,
    /// Refers to an event without saying what it is
    LackingDetail,
}

/// A whole-message pattern marking a message as insufficient.
#[derive(Debug, Clone)]
pub struct SufficiencyRule {
    pub kind: SufficiencyKind,
    pub pattern: Regex,
}

impl SufficiencyRule {
    /// `message` is expected to be trimmed already.
    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

// Whole-message match, case-insensitive, trailing punctuation tolerated.
macro_rules! whole {
    ($body:literal) => {
        concat!(r"(?i)^(?:", $body, r")[.!?]*$")
    };
}

static VAGUE_RULES: LazyLock<Vec<SufficiencyRule>> = LazyLock::new(|| {
    [
        whole!(r"(?:i\s+feel|i\s+am\s+feeling|i['’]m\s+feeling|feeling)\s+(?:(?:so|really|very|kinda|kind\s+of)\s+)?(?:bad|sad|down|awful|terrible|horrible|upset|low|off|weird|not\s+good|not\s+great|not\s+okay|not\s+ok)"),
        whole!(r"help|help\s+me|please\s+help(?:\s+me)?|i\s+need\s+help|can\s+you\s+help(?:\s+me)?"),
        whole!(r"i\s+(?:don['’]t|do\s+not|dont)\s+know(?:\s+what\s+to\s+do)?|idk|i['’]m\s+(?:not\s+sure|lost|confused)"),
        whole!(r"i\s+(?:can['’]t|cannot|cant|can\s+not)(?:\s+(?:do\s+(?:this|it)|take\s+it|cope|go\s+on))?(?:\s+anymore)?"),
        whole!(r"(?:i['’]m\s+|i\s+am\s+)?not\s+(?:feeling\s+)?(?:well|good|great|okay|ok)"),
    ]
    .into_iter()
    .map(|p| SufficiencyRule {
        kind: SufficiencyKind::Vague,
        pattern: Regex::new(p).expect("Invalid regex: vague statement pattern"),
    })
    .collect()
});

static LACKING_DETAIL_RULES: LazyLock<Vec<SufficiencyRule>> = LazyLock::new(|| {
    [
        whole!(r"(?:this|that|it|something)\s+(?:happened|is\s+happening)(?:\s+(?:again|today))?"),
        whole!(r"i(?:\s+have|['’]ve\s+got|\s+got)\s+(?:(?:a|an|some)\s+)?(?:problem|issue|situation)s?"),
        whole!(r"(?:it['’]s\s+not|it\s+is\s+not|its\s+not|it\s+isn['’]t|nothing\s+is|nothing['’]s)\s+working"),
    ]
    .into_iter()
    .map(|p| SufficiencyRule {
        kind: SufficiencyKind::LackingDetail,
        pattern: Regex::new(p).expect("Invalid regex: lacking-detail pattern"),
    })
    .collect()
});

/// Whole-message patterns for generic emotional statements.
pub fn vague_rules() -> &'static [SufficiencyRule] {
    &VAGUE_RULES
}

/// Whole-message patterns for context-free event statements.
pub fn lacking_detail_rules() -> &'static [SufficiencyRule] {
    &LACKING_DETAIL_RULES
}
