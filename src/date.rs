use crate::error::StardateError;
use chrono::{Datelike, Local, NaiveDate, Utc};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Length of `YYYY-MM-DD`.
const ISO_DATE_LEN: usize = 10;

/// A Gregorian calendar date on Earth, the input side of a conversion.
///
/// Dates are created by parsing a `YYYY-MM-DD` string, from explicit year/month/day arguments, or
/// from the current clock.
///
/// ```
/// use stardate::EarthDate;
///
/// let date: EarthDate = " 2024-02-29 ".parse().unwrap();
/// assert_eq!(60, date.ordinal());
/// assert!(date.is_leap_year());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EarthDate(NaiveDate);

impl EarthDate {
    /// Returns result of a new [EarthDate] for the given fields, or
    /// [StardateError::InvalidDateFormat] if they do not name a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, StardateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| StardateError::invalid(&format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Returns the current date in UTC at the time of this call.
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns the current date in the system's local timezone at the time of this call.
    pub fn today_local() -> Self {
        Self(Local::now().date_naive())
    }

    /// Calendar year, e.g. `2323`.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, `1`–`12`.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of the year, starting at 1 for January 1st.
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    /// Divisible by 4, except centuries that are not divisible by 400.
    pub fn is_leap_year(&self) -> bool {
        let year = self.year();
        year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
    }

    /// 366 in leap years, 365 otherwise.
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }
}

/// Checks the `DDDD-DD-DD` shape and returns the three numeric fields.
fn split_iso_fields(s: &str) -> Option<(i32, u32, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() != ISO_DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits = |range: core::ops::Range<usize>| -> Option<u32> {
        bytes[range].iter().try_fold(0u32, |acc, b| {
            b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
        })
    };

    let year = digits(0..4)?;
    let month = digits(5..7)?;
    let day = digits(8..10)?;
    // four digits always fit
    Some((year as i32, month, day))
}

impl FromStr for EarthDate {
    type Err = StardateError;

    /// Parses a date string into an [EarthDate]. After trimming surrounding whitespace, the string
    /// must be `YYYY-MM-DD`: a four digit year, a two digit month and a two digit day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        split_iso_fields(trimmed)
            .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .map(Self)
            .ok_or_else(|| StardateError::invalid(trimmed))
    }
}

impl From<NaiveDate> for EarthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Display for EarthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
