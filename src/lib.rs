//! Password feedback selection library
//!
//! This library turns a password-pattern decomposition and an overall
//! strength score into actionable guidance: one optional warning key and
//! an ordered list of suggestion keys. Keys are symbolic; rendering them
//! into display text is left to a localization layer.
//!
//! Pattern matching and guess estimation happen upstream: a matcher
//! produces the [`Match`] sequence, a scorer produces the 0-4 score, and
//! this crate only decides which messages apply.
//!
//! # Features
//!
//! - `serde` (default): Enables serialization of [`Feedback`] with message
//!   keys as strings
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_feedback::{get_feedback, Match, MatchPattern, Suggestion, Warning};
//!
//! let sequence = vec![Match::new("qwerty", MatchPattern::Spatial { turns: 1 })];
//! let feedback = get_feedback(1, &sequence);
//!
//! assert_eq!(feedback.warning, Some(Warning::StraightRowsEasyGuess));
//! assert_eq!(feedback.suggestions[0], Suggestion::AddAnotherWord);
//! println!("warning key: {:?}", feedback.warning.map(|w| w.as_key()));
//! ```

// Internal modules
mod messages;
mod rules;
mod selector;
mod types;

// Public API
pub use messages::{Suggestion, Warning};
pub use selector::get_feedback;
pub use types::{Feedback, Match, MatchPattern};
