//! # Shaping Module
//!
//! Fast, non-LLM text analysis around the model call.
//! Runs on user input BEFORE the model (is there enough to answer?) and on the
//! model's reply AFTER it (which parts are acknowledgment, advice, ...).
//!
//! ## Components
//! - `patterns`: regex tables for both pipelines
//! - `questions`: follow-up question bank
//! - `sufficiency`: input sufficiency classifier
//! - `structurer`: reply structurer with insights fallback
//! - `shaper`: facade bundling both pipelines

pub mod patterns;
pub mod questions;
pub mod shaper;
pub mod structurer;
pub mod sufficiency;

pub use patterns::{PatternRule, Section, SufficiencyKind};
pub use questions::{generate_follow_up_questions, EmotionClass};
pub use shaper::ResponseShaper;
pub use structurer::{format_structured_response, ResponseStructurer, StructuredResponse};
pub use sufficiency::{
    needs_more_information, InsufficiencyReason, SufficiencyClassifier, SufficiencyResult,
};
