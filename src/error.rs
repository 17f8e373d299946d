/// The only way a conversion can fail.
///
/// Malformed text and out-of-range values (month 13, February 30th, ...) are deliberately not
/// told apart: both mean the input is not a `YYYY-MM-DD` calendar date.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum StardateError {
    /// The input could not be read as a calendar date.
    #[error("Invalid date format: `{input}` (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The offending input, with surrounding whitespace trimmed.
        input: String,
    },
}

impl StardateError {
    pub(crate) fn invalid(input: &str) -> Self {
        StardateError::InvalidDateFormat {
            input: input.to_owned(),
        }
    }
}
