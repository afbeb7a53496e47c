//! Dictionary rule - warnings by dictionary origin plus casing and
//! substitution suggestions.

use crate::messages::{Suggestion, Warning};
use crate::types::{Feedback, Match, MatchPattern};

/// Reversed words shorter than this are not worth a suggestion.
const REVERSED_MIN_LEN: usize = 4;

/// Feedback for a dictionary match.
///
/// The warning depends on which dictionary matched and how; the suggestions
/// depend only on the token's shape and the match flags, so the returned
/// warning may be `None` while suggestions are present.
pub(super) fn dictionary_feedback(m: &Match, is_sole_match: bool) -> Feedback {
    let MatchPattern::Dictionary {
        dictionary_name,
        rank,
        guesses_log10,
        l33t,
        reversed,
    } = &m.pattern
    else {
        return Feedback::none();
    };

    let warning = match dictionary_name.as_str() {
        "passwords" => {
            if is_sole_match && !l33t && !reversed {
                if *rank <= 10 {
                    Some(Warning::Top10CommonPassword)
                } else if *rank <= 100 {
                    Some(Warning::Top100CommonPassword)
                } else {
                    Some(Warning::VeryCommonPassword)
                }
            } else if *guesses_log10 <= 4.0 {
                Some(Warning::SimilarToCommonPassword)
            } else {
                None
            }
        }
        "english_wikipedia" => is_sole_match.then_some(Warning::WordByItselfEasyGuess),
        "surnames" | "male_names" | "female_names" => {
            if is_sole_match {
                Some(Warning::NamesSurnamesByThemselvesEasyGuess)
            } else {
                Some(Warning::CommonNamesSurnamesEasyGuess)
            }
        }
        _ => None,
    };

    let mut suggestions = Vec::new();
    if starts_with_upper(&m.token) {
        suggestions.push(Suggestion::CapitalizationNotHelpMuch);
    } else if is_all_upper(&m.token) {
        suggestions.push(Suggestion::AllUppercaseAlmostEasyGuess);
    }
    if *reversed && m.token_len() >= REVERSED_MIN_LEN {
        suggestions.push(Suggestion::ReversedWordsNotMuchHarderGuess);
    }
    if *l33t {
        suggestions.push(Suggestion::PredictableSubstitutionsNotHelpMuch);
    }

    Feedback {
        warning,
        suggestions,
    }
}

/// Exactly one leading uppercase letter, nothing uppercase after it.
fn starts_with_upper(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => {}
        _ => return false,
    }
    let rest = chars.as_str();
    !rest.is_empty() && !rest.chars().any(|c| c.is_uppercase())
}

/// No lowercase letters and at least one uppercase one.
fn is_all_upper(token: &str) -> bool {
    !token.chars().any(|c| c.is_lowercase()) && token.chars().any(|c| c.is_uppercase())
}
