//! Feedback selector - picks warning and suggestions from a match sequence.

use crate::messages::Suggestion;
use crate::rules::match_feedback;
use crate::types::{Feedback, Match};

/// Scores above this get no feedback at all.
const SCORE_NO_FEEDBACK: u8 = 2;

/// Selects feedback for a scored password decomposition.
///
/// # Arguments
/// * `score` - Overall strength score in `[0, 4]`
/// * `sequence` - The matcher's ordered, non-overlapping decomposition
///
/// # Returns
/// A `Feedback` with at most one warning and display-ordered suggestions.
/// An empty sequence yields the fixed onboarding feedback; a score of 3 or 4
/// yields empty feedback. Otherwise feedback is driven by the longest match,
/// ties resolved toward the earliest match in the sequence.
pub fn get_feedback(score: u8, sequence: &[Match]) -> Feedback {
    let Some(first) = sequence.first() else {
        // starting feedback
        return Feedback::starting();
    };

    // No feedback if score is good or great.
    if score > SCORE_NO_FEEDBACK {
        return Feedback::none();
    }

    let mut longest_match = first;
    for m in &sequence[1..] {
        if m.token_len() > longest_match.token_len() {
            longest_match = m;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score,
        matches = sequence.len(),
        pattern = ?longest_match.pattern,
        "selecting feedback for longest match"
    );

    match match_feedback(longest_match, sequence.len() == 1) {
        Some(mut feedback) => {
            feedback.suggestions.insert(0, Suggestion::AddAnotherWord);
            feedback
        }
        None => Feedback {
            warning: None,
            suggestions: vec![Suggestion::AddAnotherWord],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Warning;
    use crate::types::MatchPattern;

    fn spatial(token: &str, turns: u32) -> Match {
        Match::new(token, MatchPattern::Spatial { turns })
    }

    #[test]
    fn test_empty_sequence_returns_starting_feedback() {
        for score in 0..=4 {
            let fb = get_feedback(score, &[]);
            assert_eq!(fb, Feedback::starting());
            assert_eq!(fb.suggestions.len(), 3);
        }
    }

    #[test]
    fn test_high_score_returns_empty_feedback() {
        let sequence = vec![spatial("qwerty", 1)];
        for score in 3..=4 {
            let fb = get_feedback(score, &sequence);
            assert!(fb.is_empty());
        }
    }

    #[test]
    fn test_spatial_straight_row() {
        let sequence = vec![spatial("qwerty", 1)];
        let fb = get_feedback(1, &sequence);
        assert_eq!(fb.warning, Some(Warning::StraightRowsEasyGuess));
        assert_eq!(
            fb.suggestions,
            vec![
                Suggestion::AddAnotherWord,
                Suggestion::UseLongerKeyboardPattern
            ]
        );
    }

    #[test]
    fn test_sole_top_ranked_password() {
        let sequence = vec![Match::new(
            "password",
            MatchPattern::Dictionary {
                dictionary_name: "passwords".to_string(),
                rank: 1,
                guesses_log10: 0.3,
                l33t: false,
                reversed: false,
            },
        )];
        let fb = get_feedback(0, &sequence);
        assert_eq!(fb.warning, Some(Warning::Top10CommonPassword));
        assert_eq!(fb.suggestions, vec![Suggestion::AddAnotherWord]);
    }

    #[test]
    fn test_unmatched_regex_synthesizes_default() {
        let sequence = vec![Match::new(
            "90210",
            MatchPattern::Regex {
                regex_name: "zip_code".to_string(),
            },
        )];
        let fb = get_feedback(2, &sequence);
        assert_eq!(fb.warning, None);
        assert_eq!(fb.suggestions, vec![Suggestion::AddAnotherWord]);
    }

    #[test]
    fn test_other_pattern_synthesizes_default() {
        let sequence = vec![Match::new("x$!7q", MatchPattern::Other)];
        let fb = get_feedback(1, &sequence);
        assert_eq!(fb.warning, None);
        assert_eq!(fb.suggestions, vec![Suggestion::AddAnotherWord]);
    }

    #[test]
    fn test_add_another_word_is_always_first() {
        let sequence = vec![
            Match::new("abc", MatchPattern::Sequence),
            spatial("qwerty", 1),
        ];
        let fb = get_feedback(2, &sequence);
        assert_eq!(fb.suggestions[0], Suggestion::AddAnotherWord);
    }

    #[test]
    fn test_longest_match_wins() {
        let sequence = vec![
            spatial("asdf", 1),
            Match::new("121212", MatchPattern::Repeat {
                base_token: "12".to_string(),
            }),
        ];
        let fb = get_feedback(1, &sequence);
        assert_eq!(fb.warning, Some(Warning::RepeatsSlightlyHarderGuess));
    }

    #[test]
    fn test_tie_break_picks_earlier_match() {
        // equal token lengths; the spatial match comes first
        let sequence = vec![
            spatial("qwerty", 1),
            Match::new("aaaaaa", MatchPattern::Repeat {
                base_token: "a".to_string(),
            }),
        ];
        let fb = get_feedback(1, &sequence);
        assert_eq!(fb.warning, Some(Warning::StraightRowsEasyGuess));
    }

    #[test]
    fn test_multi_match_is_not_sole() {
        let sequence = vec![
            Match::new(
                "morgan",
                MatchPattern::Dictionary {
                    dictionary_name: "surnames".to_string(),
                    rank: 300,
                    guesses_log10: 3.0,
                    l33t: false,
                    reversed: false,
                },
            ),
            Match::new("19", MatchPattern::Other),
        ];
        let fb = get_feedback(1, &sequence);
        assert_eq!(fb.warning, Some(Warning::CommonNamesSurnamesEasyGuess));
    }
}
