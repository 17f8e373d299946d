use crate::{date::EarthDate, error::StardateError};
use core::fmt::{self, Display, Write as _};
use tracing::debug;

/// The Earth year that maps to stardate `0`.
pub const EPOCH_YEAR: i32 = 2323;

/// Stardate units per Earth year.
pub const UNITS_PER_YEAR: f64 = 1000.0;

/// Fractional digits in the canonical display form.
pub const PRECISION: usize = 2;

/// A stardate, the output side of a conversion.
///
/// Each Earth year spans [UNITS_PER_YEAR] units starting at `1000 × (year − 2323)`, and a date
/// sits within its year in proportion to how many days of that year have already elapsed. A
/// stardate has no identity of its own: it is always recomputed from an [EarthDate].
///
/// It displays with [PRECISION] fractional digits unless the formatter asks for a precision:
///
/// ```
/// use stardate::{EarthDate, Stardate};
///
/// let date = EarthDate::from_ymd(2323, 12, 31).unwrap();
/// let stardate = Stardate::from_date(&date);
/// assert_eq!("997.26", stardate.to_string());
/// assert_eq!("997.3", format!("{stardate:.1}"));
/// assert_eq!("  997.26", format!("{stardate:>8}"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Stardate(f64);

impl Stardate {
    /// Computes `1000 × (year − 2323) + 1000 × (ordinal − 1) / days_in_year`.
    pub fn from_date(date: &EarthDate) -> Self {
        let year_offset = f64::from(date.year() - EPOCH_YEAR);
        let elapsed_days = f64::from(date.ordinal() - 1);
        let days_in_year = f64::from(date.days_in_year());

        Self(UNITS_PER_YEAR * year_offset + UNITS_PER_YEAR * elapsed_days / days_in_year)
    }

    /// Returns the unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to [PRECISION] fractional digits, as shown to users.
    pub fn to_display_string(&self) -> String {
        format!("{:.*}", PRECISION, self.0)
    }
}

impl From<&EarthDate> for Stardate {
    fn from(date: &EarthDate) -> Self {
        Self::from_date(date)
    }
}

impl Display for Stardate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(PRECISION);
        let rendered = format!("{:.*}", precision, self.0);

        // `Formatter::pad` would treat the precision as a truncation length, so pad by hand
        let padding = f.width().unwrap_or(0).saturating_sub(rendered.len());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&rendered)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

/// Interprets `input` as a `YYYY-MM-DD` date and converts it to a [Stardate].
///
/// Surrounding whitespace is ignored.
///
/// ```
/// use stardate::{convert, StardateError};
///
/// assert_eq!("1000.00", convert("2324-01-01").unwrap().to_string());
/// assert!(matches!(
///     convert("not-a-date"),
///     Err(StardateError::InvalidDateFormat { .. })
/// ));
/// ```
///
/// # Errors
///
/// - Returns [StardateError::InvalidDateFormat] if `input` is not a valid calendar date.
pub fn convert(input: &str) -> Result<Stardate, StardateError> {
    match input.parse::<EarthDate>() {
        Ok(date) => {
            let stardate = Stardate::from_date(&date);
            debug!(%date, %stardate, "converted earth date");
            Ok(stardate)
        }
        Err(err) => {
            debug!(%err, "rejected input");
            Err(err)
        }
    }
}

/// Returns true if `input` is a valid `YYYY-MM-DD` date, i.e. exactly when [convert] would
/// succeed.
pub fn is_valid(input: &str) -> bool {
    input.parse::<EarthDate>().is_ok()
}
