//! # stardate
//!
//! A library for converting Earth calendar dates into stardates.
//!
//! ## Examples
//!
//! Quickly get a stardate:
//!
//! ```
//! use stardate::prelude::*;
//!
//! let stardate = convert("2324-12-31").unwrap();
//! assert_eq!("1997.27", stardate.to_string());
//!
//! // leading and trailing whitespace is ignored
//! assert_eq!(convert("  2324-12-31  "), Ok(stardate));
//!
//! // invalid dates are an error, never a panic
//! assert!(matches!(
//!     convert("2023-02-29"),
//!     Err(StardateError::InvalidDateFormat { .. })
//! ));
//! ```
//!
//! Or, break down the steps:
//!
//! ```
//! use stardate::prelude::*;
//!
//! assert!(is_valid("2024-02-29"));
//! let date: EarthDate = "2024-02-29".parse().unwrap();
//! let stardate = Stardate::from_date(&date);
//! assert!(stardate.value() < 0.0);
//! ```
//!
//! ## Important Terms
//!
//! - **Earth date**: A Gregorian calendar date written `YYYY-MM-DD`: four digit year, two digit
//!   month, two digit day. It's modeled by the [`EarthDate`] struct.
//! - **Stardate**: A fictional decimal value derived from an Earth date. It's modeled by the
//!   [`Stardate`] struct.
//! - **Epoch year**: The year [`EPOCH_YEAR`] (2323), whose January 1st is stardate `0`.
//!
//! ## Formula
//!
//! ```text
//! stardate = 1000 × (year − 2323) + 1000 × (day_of_year − 1) / days_in_year
//! ```
//!
//! where `day_of_year` starts at 1 on January 1st and `days_in_year` is 366 in leap years and 365
//! otherwise. Stardates are displayed rounded to two fractional digits.
//!
//! ## Presentation
//!
//! Two thin adapters sit on top of [`convert`]:
//!
//! - [`form`]: an input field and a read-only output field, as an interactive form would have.
//! - [`console`]: a loop over lines of input, answering each with `StarDate: <value>`.
//!
//! ## Prelude
//!
//! stardate provides a prelude module for convenience. Use it with:
//!
//! ```
//! use stardate::prelude::*;
//! ```
#![warn(missing_docs)]

pub mod console;
mod date;
mod error;
pub mod form;
mod stardate;

pub use crate::date::EarthDate;
pub use crate::error::StardateError;
pub use crate::stardate::{convert, is_valid, Stardate, EPOCH_YEAR, PRECISION, UNITS_PER_YEAR};

/// A convenience module appropriate for glob imports (`use stardate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::convert;
    #[doc(no_inline)]
    pub use crate::is_valid;
    #[doc(no_inline)]
    pub use crate::EarthDate;
    #[doc(no_inline)]
    pub use crate::Stardate;
    #[doc(no_inline)]
    pub use crate::StardateError;
}
