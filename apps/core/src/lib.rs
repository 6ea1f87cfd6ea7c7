//! Solace response-shaping core.
//!
//! Sits between the chat layer and the language model:
//! - before the call, [`needs_more_information`] decides whether a user
//!   message is too vague to answer and proposes follow-up questions;
//! - after the call, [`format_structured_response`] splits the reply into
//!   acknowledgment, insights, suggestions, resources and a follow-up.
//!
//! Both pipelines are pure functions over a string and safe to call from any
//! number of threads.

pub mod config;
pub mod error;
pub mod logging;
pub mod shaping;

#[cfg(test)]
mod tests;

pub use config::ShaperConfig;
pub use error::AppError;
pub use shaping::{
    format_structured_response, generate_follow_up_questions, needs_more_information,
    ResponseShaper, StructuredResponse, SufficiencyResult,
};
