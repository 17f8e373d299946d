//! Adapter for an interactive form with one input field and one output field.

use crate::{
    error::StardateError,
    stardate::{convert, Stardate},
};

/// Text shown in the output field when the input field does not hold a valid date.
pub const INVALID_OUTPUT: &str = "Invalid date format";

/// Renders the output field text for the given input field text: the stardate with two
/// fractional digits, or [INVALID_OUTPUT].
///
/// ```
/// use stardate::form;
///
/// assert_eq!("0.00", form::render("2323-01-01"));
/// assert_eq!("Invalid date format", form::render("tomorrow"));
/// ```
pub fn render(input: &str) -> String {
    match convert(input) {
        Ok(stardate) => stardate.to_display_string(),
        Err(_) => INVALID_OUTPUT.to_owned(),
    }
}

/// The two fields of an interactive conversion form: an editable Earth date field and a read-only
/// stardate field.
///
/// This holds only what a widget host needs to redraw; all arithmetic happens in [convert].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Form {
    input: String,
    output: String,
}

impl Form {
    /// Creates a form with both fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the input field text. The output field keeps its previous contents until the
    /// next [Form::submit].
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input field text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current output field text.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Converts the input field and updates the output field. The outcome is also returned for
    /// hosts that want to react to invalid input (e.g. by highlighting the field).
    pub fn submit(&mut self) -> Result<Stardate, StardateError> {
        let result = convert(&self.input);
        self.output = match &result {
            Ok(stardate) => stardate.to_display_string(),
            Err(_) => INVALID_OUTPUT.to_owned(),
        };
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("2323-01-01", "0.00")]
    #[case(" 2324-01-01\n", "1000.00")]
    #[case("2323-12-31", "997.26")]
    #[case("2023-02-29", INVALID_OUTPUT)]
    #[case("", INVALID_OUTPUT)]
    fn test_render(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(expected, render(input));
    }

    #[test]
    fn test_new_form_is_blank() {
        let form = Form::new();
        assert_eq!("", form.input());
        assert_eq!("", form.output());
    }

    #[test]
    fn test_submit_updates_output() {
        let mut form = Form::new();
        form.set_input("2324-12-31");
        assert!(form.submit().is_ok());
        assert_eq!("1997.27", form.output());

        form.set_input("2324-13-31");
        // output is stale until submitted
        assert_eq!("1997.27", form.output());
        assert!(matches!(
            form.submit(),
            Err(StardateError::InvalidDateFormat { .. })
        ));
        assert_eq!(INVALID_OUTPUT, form.output());
        assert_eq!("2324-13-31", form.input());
    }
}
