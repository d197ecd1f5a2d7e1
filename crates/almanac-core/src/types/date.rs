//! Date type for calendar calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Weekday;
use crate::error::{AlmanacError, AlmanacResult};

/// A calendar date in the proleptic Gregorian calendar.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Every constructor
/// validates its input, so a `Date` value is always a real calendar day.
///
/// # Example
///
/// ```rust
/// use almanac_core::types::Date;
///
/// let date = Date::from_ymd(2024, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
/// assert!(Date::from_ymd(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AlmanacResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AlmanacError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AlmanacResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AlmanacError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Date(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(self.0.with_day(self.days_in_month()).unwrap_or(self.0))
    }

    /// Adds a signed number of days.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the result leaves the
    /// representable date range.
    pub fn checked_add_days(&self, days: i64) -> AlmanacResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| {
                AlmanacError::invalid_date(format!("{self} {days:+} days is out of range"))
            })
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> AlmanacResult<Self> {
        let total_months =
            i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(months);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;
        let new_year = i32::try_from(total_months.div_euclid(12)).map_err(|_| {
            AlmanacError::invalid_date(format!("{self} {months:+} months is out of range"))
        })?;

        let new_day = self.day().min(days_in_month(new_year, new_month));
        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    ///
    /// February 29 moved onto a non-leap year becomes February 28.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> AlmanacResult<Self> {
        let new_year = self.year().checked_add(years).ok_or_else(|| {
            AlmanacError::invalid_date(format!("{self} {years:+} years is out of range"))
        })?;
        let new_day = self.day().min(days_in_month(new_year, self.month()));

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Number of days in `month` of `year` (0 for a month outside 1-12).
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
