//! Message key vocabulary for warnings and suggestions.
//!
//! Keys are opaque symbolic identifiers; the localization layer resolves
//! them to display text. `as_key()` strings are stable and are the only
//! representation that crosses the crate boundary in serialized form.

/// Warning shown for the weakest pattern in a guessable password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    StraightRowsEasyGuess,
    ShortKeyboardPatternsEasyGuess,
    RepeatsEasyGuess,
    RepeatsSlightlyHarderGuess,
    SequencesEasyGuess,
    RecentYearsEasyGuess,
    DatesEasyGuess,
    Top10CommonPassword,
    Top100CommonPassword,
    VeryCommonPassword,
    SimilarToCommonPassword,
    WordByItselfEasyGuess,
    NamesSurnamesByThemselvesEasyGuess,
    CommonNamesSurnamesEasyGuess,
}

impl Warning {
    /// Stable key the localization layer indexes its translations by.
    pub fn as_key(&self) -> &'static str {
        match self {
            Warning::StraightRowsEasyGuess => "straight_rows_easy_guess",
            Warning::ShortKeyboardPatternsEasyGuess => "short_keyboard_patterns_easy_guess",
            Warning::RepeatsEasyGuess => "repeats_easy_guess",
            Warning::RepeatsSlightlyHarderGuess => "repeats_slightly_harder_guess",
            Warning::SequencesEasyGuess => "sequences_easy_guess",
            Warning::RecentYearsEasyGuess => "recent_years_easy_guess",
            Warning::DatesEasyGuess => "dates_easy_guess",
            Warning::Top10CommonPassword => "top_10_common_password",
            Warning::Top100CommonPassword => "top_100_common_password",
            Warning::VeryCommonPassword => "very_common_password",
            Warning::SimilarToCommonPassword => "similar_to_common_password",
            Warning::WordByItselfEasyGuess => "word_by_itself_easy_guess",
            Warning::NamesSurnamesByThemselvesEasyGuess => {
                "names_surnames_by_themselves_easy_guess"
            }
            Warning::CommonNamesSurnamesEasyGuess => "common_names_surnames_easy_guess",
        }
    }
}

/// Suggestion for improving a guessable password. Display order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    FewWords,
    AvoidCommonPhrases,
    NoNeedSymbols,
    AddAnotherWord,
    UseLongerKeyboardPattern,
    AvoidRepeatedWords,
    AvoidSequences,
    AvoidRecentYears,
    AvoidAssociatedYears,
    AvoidDatesAssociatedYears,
    CapitalizationNotHelpMuch,
    AllUppercaseAlmostEasyGuess,
    ReversedWordsNotMuchHarderGuess,
    PredictableSubstitutionsNotHelpMuch,
}

impl Suggestion {
    /// Stable key the localization layer indexes its translations by.
    pub fn as_key(&self) -> &'static str {
        match self {
            Suggestion::FewWords => "few_words",
            Suggestion::AvoidCommonPhrases => "avoid_common_phrases",
            Suggestion::NoNeedSymbols => "no_need_symbols",
            Suggestion::AddAnotherWord => "add_another_word",
            Suggestion::UseLongerKeyboardPattern => "use_longer_keyboard_pattern",
            Suggestion::AvoidRepeatedWords => "avoid_repeated_words",
            Suggestion::AvoidSequences => "avoid_sequences",
            Suggestion::AvoidRecentYears => "avoid_recent_years",
            Suggestion::AvoidAssociatedYears => "avoid_associated_years",
            Suggestion::AvoidDatesAssociatedYears => "avoid_dates_associated_years",
            Suggestion::CapitalizationNotHelpMuch => "capitalization_not_help_much",
            Suggestion::AllUppercaseAlmostEasyGuess => "all_uppercase_almost_easy_guess",
            Suggestion::ReversedWordsNotMuchHarderGuess => {
                "reversed_words_not_much_harder_guess"
            }
            Suggestion::PredictableSubstitutionsNotHelpMuch => {
                "predictable_substitutions_not_help_much"
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Warning {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_key())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Suggestion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_key())
    }
}
