//! Per-pattern feedback rules
//!
//! Each rule maps one pattern kind to its warning and suggestions.

mod dictionary;
mod pattern;

pub use pattern::match_feedback;

/// Result of dispatching a single match.
/// - `Some(feedback)` - The pattern kind has guidance for the user
/// - `None` - No feedback for this kind; the caller synthesizes a default
pub type RuleResult = Option<crate::types::Feedback>;
