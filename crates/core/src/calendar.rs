//! Calendar arithmetic for the target month
//!
//! Months are zero-based everywhere inside the room document, matching the
//! wire format; user-facing input is 1-based and goes through
//! [`parse_month_input`].

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Day count of a month, leap years included.
///
/// `month` is zero-based. An out-of-range month yields 0 days, which every
/// caller treats as an empty month; documents written by this crate never
/// contain one.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month < 12, "month {} is not zero-based", month);

    let (next_year, next_month) = if month >= 11 {
        (year + 1, 1)
    } else {
        (year, month + 2)
    };

    // Last day of the month is the day before the 1st of the next one.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weekday of the 1st of the month, 0 = Sunday.
///
/// Used by the rendering layer to pad the leading cells of the calendar
/// grid; it shares the date arithmetic so it lives here.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    debug_assert!(month < 12, "month {} is not zero-based", month);

    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Parse a `YYYY-MM` month field into `(year, zero-based month)`.
///
/// The month component is 1-based as typed by the user.
pub fn parse_month_input(input: &str) -> Result<(i32, u32)> {
    let invalid = || Error::InvalidInput(format!("expected YYYY-MM month, got '{}'", input));

    let (year_part, month_part) = input.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year_part.parse().map_err(|_| invalid())?;
    let month: u32 = month_part.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(Error::InvalidInput(format!(
            "month {} is outside 1..=12",
            month
        )));
    }

    Ok((year, month - 1))
}
