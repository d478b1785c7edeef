//! Error types for tutor-luhn.

/// Rejected Luhn input.
///
/// Both variants report the same machine-readable kind,
/// `NON_DIGIT_CHARACTER`; the variant says which case applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LuhnError {
    /// A character other than `0`-`9` remained after removing whitespace.
    ///
    /// `index` counts chars of the whitespace-stripped string;
    /// `input_index` counts chars of the text as typed.
    #[error("Non-digit character {found:?} at position {input_index} of the input")]
    NonDigitCharacter {
        found: char,
        index: usize,
        input_index: usize,
    },

    /// Nothing remained after removing whitespace.
    #[error("No digits: input is empty after removing whitespace")]
    NoDigits,
}

impl LuhnError {
    /// Stable machine-readable kind for this error.
    pub fn code(&self) -> &'static str {
        match self {
            LuhnError::NonDigitCharacter { .. } | LuhnError::NoDigits => "NON_DIGIT_CHARACTER",
        }
    }
}

/// Result alias for tutor-luhn operations.
pub type Result<T> = std::result::Result<T, LuhnError>;
