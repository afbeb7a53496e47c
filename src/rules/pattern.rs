//! Pattern-kind dispatch - maps the longest match to its feedback rule.

use super::{RuleResult, dictionary::dictionary_feedback};
use crate::messages::{Suggestion, Warning};
use crate::types::{Feedback, Match, MatchPattern};

/// Selects the warning and suggestions for a single match.
///
/// # Returns
/// - `Some(feedback)` if the pattern kind has guidance for the user
/// - `None` for kinds without guidance (unknown regexes, [`MatchPattern::Other`])
pub fn match_feedback(m: &Match, is_sole_match: bool) -> RuleResult {
    match &m.pattern {
        MatchPattern::Dictionary { .. } => Some(dictionary_feedback(m, is_sole_match)),
        MatchPattern::Spatial { turns } => {
            let warning = if *turns == 1 {
                Warning::StraightRowsEasyGuess
            } else {
                Warning::ShortKeyboardPatternsEasyGuess
            };
            Some(Feedback {
                warning: Some(warning),
                suggestions: vec![Suggestion::UseLongerKeyboardPattern],
            })
        }
        MatchPattern::Repeat { base_token } => {
            let warning = if base_token.chars().count() == 1 {
                Warning::RepeatsEasyGuess
            } else {
                Warning::RepeatsSlightlyHarderGuess
            };
            Some(Feedback {
                warning: Some(warning),
                suggestions: vec![Suggestion::AvoidRepeatedWords],
            })
        }
        MatchPattern::Sequence => Some(Feedback {
            warning: Some(Warning::SequencesEasyGuess),
            suggestions: vec![Suggestion::AvoidSequences],
        }),
        MatchPattern::Regex { regex_name } => {
            if regex_name == "recent_year" {
                Some(Feedback {
                    warning: Some(Warning::RecentYearsEasyGuess),
                    suggestions: vec![
                        Suggestion::AvoidRecentYears,
                        Suggestion::AvoidAssociatedYears,
                    ],
                })
            } else {
                None
            }
        }
        MatchPattern::Date => Some(Feedback {
            warning: Some(Warning::DatesEasyGuess),
            suggestions: vec![Suggestion::AvoidDatesAssociatedYears],
        }),
        MatchPattern::Other => None,
    }
}
