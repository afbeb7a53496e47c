//! Input and output types shared with the matcher and presentation layers.

use crate::messages::{Suggestion, Warning};

/// Pattern kind and its kind-specific metadata, as produced by the matcher.
///
/// The set of kinds this crate gives feedback on is closed; anything else
/// the matcher may emit maps to [`MatchPattern::Other`] and yields no
/// pattern-specific feedback rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPattern {
    Dictionary {
        /// Name of the matched dictionary, e.g. "passwords" or "surnames".
        dictionary_name: String,
        /// Frequency rank within the dictionary, 1 = most common.
        rank: u32,
        guesses_log10: f64,
        /// Matched through leet-speak substitution.
        l33t: bool,
        /// Matched with the token reversed.
        reversed: bool,
    },
    Spatial {
        /// Number of direction changes along the keyboard run.
        turns: u32,
    },
    Repeat {
        /// The repeating unit, e.g. "ab" for "ababab".
        base_token: String,
    },
    Sequence,
    Regex {
        /// Name of the matching regex, e.g. "recent_year".
        regex_name: String,
    },
    Date,
    Other,
}

/// One recognized substring of the password.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// The matched substring.
    pub token: String,
    pub pattern: MatchPattern,
}

impl Match {
    pub fn new(token: impl Into<String>, pattern: MatchPattern) -> Self {
        Self {
            token: token.into(),
            pattern,
        }
    }

    /// Token length in characters, the unit used for the longest-match
    /// tie-break and the reversed-word threshold.
    pub fn token_len(&self) -> usize {
        self.token.chars().count()
    }
}

/// The selected guidance: at most one warning plus ordered suggestions.
///
/// Suggestion order is display order and duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Feedback {
    pub warning: Option<Warning>,
    pub suggestions: Vec<Suggestion>,
}

impl Feedback {
    /// No warning, no suggestions.
    pub fn none() -> Self {
        Self::default()
    }

    /// The fixed onboarding feedback shown before any pattern was matched.
    pub fn starting() -> Self {
        Self {
            warning: None,
            suggestions: vec![
                Suggestion::FewWords,
                Suggestion::AvoidCommonPhrases,
                Suggestion::NoNeedSymbols,
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warning.is_none() && self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_len_counts_chars_not_bytes() {
        let m = Match::new("pässwörter", MatchPattern::Other);
        assert_eq!(m.token_len(), 10);
        assert!(m.token.len() > 10);
    }

    #[test]
    fn test_starting_feedback_has_three_suggestions() {
        let fb = Feedback::starting();
        assert!(fb.warning.is_none());
        assert_eq!(
            fb.suggestions,
            vec![
                Suggestion::FewWords,
                Suggestion::AvoidCommonPhrases,
                Suggestion::NoNeedSymbols,
            ]
        );
    }

    #[test]
    fn test_none_is_empty() {
        assert!(Feedback::none().is_empty());
        assert!(!Feedback::starting().is_empty());
    }
}
