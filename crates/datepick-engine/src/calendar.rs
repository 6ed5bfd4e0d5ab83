//! Calendar arithmetic for the day grid.
//!
//! Months are 0-based throughout the engine (`0` = January, `11` = December),
//! matching the month index carried by [`DateValue`](crate::value::DateValue)
//! and the position of a month name in a resolved locale.

use chrono::{Datelike, NaiveDate};

use crate::error::{PickerError, Result};

/// Number of months in a year; valid 0-based months are `0..MONTHS_PER_YEAR`.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Reject a 0-based month outside `0..=11`.
pub fn check_month(month0: u32) -> Result<()> {
    if month0 < MONTHS_PER_YEAR {
        Ok(())
    } else {
        Err(PickerError::InvalidMonth(month0))
    }
}

/// Number of days in `month0` of `year`.
///
/// Computed as the day-of-month of the day before the first of the following
/// month, so February follows the Gregorian leap-year rule.
///
/// # Errors
///
/// Returns [`PickerError::InvalidMonth`] if `month0` is not in `0..=11`, or
/// [`PickerError::InvalidDate`] if the year is outside chrono's supported range.
///
/// # Examples
///
/// ```
/// use datepick_engine::calendar::month_length;
///
/// assert_eq!(month_length(2024, 1).unwrap(), 29);
/// assert_eq!(month_length(2023, 1).unwrap(), 28);
/// ```
pub fn month_length(year: i32, month0: u32) -> Result<u32> {
    check_month(month0)?;
    let (next_year, next_month) = if month0 == MONTHS_PER_YEAR - 1 {
        (year.checked_add(1), 1)
    } else {
        (Some(year), month0 + 2)
    };
    next_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1))
        .and_then(|first_next| first_next.pred_opt())
        .map(|last_day| last_day.day())
        .ok_or_else(|| PickerError::InvalidDate(format!("year {year} is out of range")))
}

/// The ordered day numbers `[1..=N]` shown in the grid for `month0` of `year`.
///
/// # Errors
///
/// Same as [`month_length`].
pub fn days_in_month(year: i32, month0: u32) -> Result<Vec<u32>> {
    Ok((1..=month_length(year, month0)?).collect())
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
