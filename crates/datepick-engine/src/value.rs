//! The composite date-time value under edit.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar::check_month;
use crate::error::{PickerError, Result};

/// A wall-clock date and time, always calendar-valid.
///
/// Edits never mutate in place: each `with_*` method returns a new value with
/// one field group replaced and everything else carried over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateValue(NaiveDateTime);

impl DateValue {
    /// Build a value from components, with a 0-based month.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidMonth`], [`PickerError::InvalidDate`] (e.g.
    /// February 30) or [`PickerError::InvalidTime`].
    ///
    /// # Examples
    ///
    /// ```
    /// use datepick_engine::DateValue;
    ///
    /// let v = DateValue::new(2025, 5, 15, 14, 30).unwrap();
    /// assert_eq!((v.year(), v.month0(), v.day()), (2025, 5, 15));
    /// assert!(DateValue::new(2025, 1, 30, 0, 0).is_err());
    /// ```
    pub fn new(year: i32, month0: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        let date = make_date(year, month0, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| PickerError::InvalidTime(format!("{hour:02}:{minute:02}")))?;
        Ok(Self(date.and_time(time)))
    }

    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 0-based (0 = January).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Replace year, month and day together, keeping hour and minute.
    ///
    /// Seconds and sub-second precision reset to zero, as when the value is
    /// rebuilt from its picked components.
    pub fn with_date(self, year: i32, month0: u32, day: u32) -> Result<Self> {
        let date = make_date(year, month0, day)?;
        let time = NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .ok_or_else(|| PickerError::InvalidTime(self.0.time().to_string()))?;
        Ok(Self(date.and_time(time)))
    }

    /// Replace the hour only.
    pub fn with_hour(self, hour: u32) -> Result<Self> {
        self.0
            .with_hour(hour)
            .map(Self)
            .ok_or_else(|| PickerError::InvalidTime(format!("hour {hour}")))
    }

    /// Replace the minute only.
    pub fn with_minute(self, minute: u32) -> Result<Self> {
        self.0
            .with_minute(minute)
            .map(Self)
            .ok_or_else(|| PickerError::InvalidTime(format!("minute {minute}")))
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn make_date(year: i32, month0: u32, day: u32) -> Result<NaiveDate> {
    check_month(month0)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or_else(|| {
        PickerError::InvalidDate(format!("{year:04}-{:02}-{day:02}", month0 + 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value() -> DateValue {
        DateValue::new(2025, 5, 15, 9, 45).unwrap()
    }

    #[test]
    fn test_new_rejects_feb_30() {
        let err = DateValue::new(2025, 1, 30, 0, 0).unwrap_err();
        assert_eq!(err, PickerError::InvalidDate("2025-02-30".to_string()));
    }

    #[test]
    fn test_new_rejects_bad_month_and_time() {
        assert_eq!(
            DateValue::new(2025, 12, 1, 0, 0),
            Err(PickerError::InvalidMonth(12))
        );
        assert!(matches!(
            DateValue::new(2025, 0, 1, 24, 0),
            Err(PickerError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_month_is_zero_based() {
        let v = DateValue::new(2025, 0, 31, 0, 0).unwrap();
        assert_eq!(v.date(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(v.month0(), 0);
    }

    #[test]
    fn test_with_date_keeps_time() {
        let v = value().with_date(2024, 1, 29).unwrap();
        assert_eq!((v.year(), v.month0(), v.day()), (2024, 1, 29));
        assert_eq!((v.hour(), v.minute()), (9, 45));
    }

    #[test]
    fn test_with_date_resets_seconds() {
        let dt = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_milli_opt(9, 45, 12, 500)
            .unwrap();
        let v = DateValue::from_naive(dt).with_date(2025, 5, 20).unwrap();
        assert_eq!(v.second(), 0);
        assert_eq!(v.as_naive().nanosecond(), 0);
    }

    #[test]
    fn test_with_date_rejects_invalid_day() {
        assert!(value().with_date(2023, 1, 29).is_err());
    }

    #[test]
    fn test_with_hour_only_touches_hour() {
        let v = value().with_hour(14).unwrap();
        assert_eq!(v.hour(), 14);
        assert_eq!((v.year(), v.month0(), v.day(), v.minute()), (2025, 5, 15, 45));
    }

    #[test]
    fn test_with_minute_only_touches_minute() {
        let v = value().with_minute(0).unwrap();
        assert_eq!(v.minute(), 0);
        assert_eq!((v.year(), v.month0(), v.day(), v.hour()), (2025, 5, 15, 9));
    }

    #[test]
    fn test_with_hour_out_of_range() {
        assert!(value().with_hour(24).is_err());
        assert!(value().with_minute(60).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(value().to_string(), "2025-06-15 09:45:00");
    }
}
