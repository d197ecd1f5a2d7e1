//! Business day classification, adjustment conventions and date advancement.
//!
//! All functions here are stateless: they take the holiday calendar and the
//! weekend-day set on every call. Use [`WeekendDays::default`] for the usual
//! Saturday/Sunday weekend.

use std::fmt;
use std::str::FromStr;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::HolidayCalendar;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::{Date, Period, TimeUnit, WeekendDays};

/// Maximum number of days a single business-day search moves away from its
/// starting date before giving up.
pub const MAX_SEARCH_DAYS: u32 = 366;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,

    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = AlmanacError;

    /// Accepts the variant name in any case, with or without spaces,
    /// underscores or hyphens, and the market abbreviations F, MF, P, MP, U.
    fn from_str(s: &str) -> AlmanacResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" | "u" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(AlmanacError::invalid_argument(format!(
                "unknown business day convention '{s}'"
            ))),
        }
    }
}

/// Returns true if `date` is neither a weekend day nor a holiday.
#[must_use]
pub fn is_business_day(date: Date, calendar: &HolidayCalendar, weekend: &WeekendDays) -> bool {
    !weekend.contains(date.weekday()) && !calendar.is_holiday(date)
}

/// Adjusts a date according to the given business day convention.
///
/// A date that is already a business day is returned unchanged.
///
/// # Errors
///
/// Returns `AlmanacError::BusinessDaySearchExhausted` if no business day lies
/// within [`MAX_SEARCH_DAYS`] in the search direction, which happens when the
/// weekend covers all seven days or the calendar blocks out a whole year.
///
/// # Example
///
/// ```
/// use almanac_core::calendars::{adjust, BusinessDayConvention, HolidayCalendar};
/// use almanac_core::types::{Date, WeekendDays};
///
/// let calendar = HolidayCalendar::new();
/// let saturday = Date::from_ymd(2024, 6, 29).unwrap();
///
/// let following = adjust(
///     saturday,
///     BusinessDayConvention::Following,
///     &calendar,
///     &WeekendDays::default(),
/// )
/// .unwrap();
/// assert_eq!(following, Date::from_ymd(2024, 7, 1).unwrap());
///
/// let modified = adjust(
///     saturday,
///     BusinessDayConvention::ModifiedFollowing,
///     &calendar,
///     &WeekendDays::default(),
/// )
/// .unwrap();
/// assert_eq!(modified, Date::from_ymd(2024, 6, 28).unwrap());
/// ```
pub fn adjust(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> AlmanacResult<Date> {
    if convention == BusinessDayConvention::Unadjusted
        || is_business_day(date, calendar, weekend)
    {
        return Ok(date);
    }

    let adjusted = match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => following(date, calendar, weekend)?,

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar, weekend)?;
            if same_month(adjusted, date) {
                adjusted
            } else {
                preceding(date, calendar, weekend)?
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar, weekend)?,

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = preceding(date, calendar, weekend)?;
            if same_month(adjusted, date) {
                adjusted
            } else {
                following(date, calendar, weekend)?
            }
        }
    };

    trace!("adjusted {date} to {adjusted} ({convention})");
    Ok(adjusted)
}

/// Moves `date` by `period`, then adjusts the result with `convention`.
///
/// Days and weeks are plain day counts. Months and years keep the day of
/// month, clamping to the last day of the target month when it is shorter
/// (January 31 + 1M is February 28 or 29; February 29 + 1Y is February 28).
///
/// # Errors
///
/// Returns `AlmanacError::InvalidDate` if the target leaves the supported
/// date range, or any error from [`adjust`].
///
/// # Example
///
/// ```
/// use almanac_core::calendars::{advance, BusinessDayConvention, HolidayCalendar};
/// use almanac_core::types::{Date, Period, WeekendDays};
///
/// let end = advance(
///     Date::from_ymd(2024, 1, 31).unwrap(),
///     Period::months(1),
///     BusinessDayConvention::Unadjusted,
///     &HolidayCalendar::new(),
///     &WeekendDays::default(),
/// )
/// .unwrap();
/// assert_eq!(end, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
pub fn advance(
    date: Date,
    period: Period,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> AlmanacResult<Date> {
    let value = period.value();
    let target = match period.unit() {
        TimeUnit::Days => date.checked_add_days(i64::from(value))?,
        TimeUnit::Weeks => date.checked_add_days(i64::from(value) * 7)?,
        TimeUnit::Months => date.add_months(value)?,
        TimeUnit::Years => date.add_years(value)?,
    };

    adjust(target, convention, calendar, weekend)
}

/// [`advance`] with the period given as a tenor string such as `"6M"`.
///
/// # Errors
///
/// Returns `AlmanacError::PeriodParse` for a malformed tenor, otherwise the
/// errors of [`advance`].
pub fn advance_tenor(
    date: Date,
    tenor: &str,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> AlmanacResult<Date> {
    let period = Period::parse(tenor)?;
    advance(date, period, convention, calendar, weekend)
}

/// Returns `date` if it is a business day, otherwise the next one after it.
///
/// # Errors
///
/// Returns `AlmanacError::BusinessDaySearchExhausted` past the search bound.
pub fn next_business_day(
    date: Date,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> AlmanacResult<Date> {
    following(date, calendar, weekend)
}

/// Returns `date` if it is a business day, otherwise the last one before it.
///
/// # Errors
///
/// Returns `AlmanacError::BusinessDaySearchExhausted` past the search bound.
pub fn previous_business_day(
    date: Date,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> AlmanacResult<Date> {
    preceding(date, calendar, weekend)
}

/// Moves `days` business days forward (positive) or backward (negative).
///
/// The starting date itself does not count, and need not be a business day.
///
/// # Errors
///
/// Returns `AlmanacError::BusinessDaySearchExhausted` if any gap between
/// consecutive business days exceeds the search bound.
pub fn add_business_days(
    date: Date,
    days: i32,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> AlmanacResult<Date> {
    let step: i64 = if days >= 0 { 1 } else { -1 };
    let mut result = date;

    for _ in 0..days.unsigned_abs() {
        result = scan(result.checked_add_days(step)?, step, calendar, weekend)?;
    }

    Ok(result)
}

/// Counts business days after `start` up to and including `end`.
///
/// Returns a negative count if `end` is before `start`.
#[must_use]
pub fn business_days_between(
    start: Date,
    end: Date,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> i64 {
    let (from, to, sign) = if start <= end {
        (start, end, 1)
    } else {
        (end, start, -1)
    };

    let count = (1..=from.days_between(&to))
        .filter_map(|offset| from.checked_add_days(offset).ok())
        .filter(|day| is_business_day(*day, calendar, weekend))
        .count();

    sign * count as i64
}

fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Returns the next business day on or after the given date.
fn following(date: Date, calendar: &HolidayCalendar, weekend: &WeekendDays) -> AlmanacResult<Date> {
    scan(date, 1, calendar, weekend)
}

/// Returns the previous business day on or before the given date.
fn preceding(date: Date, calendar: &HolidayCalendar, weekend: &WeekendDays) -> AlmanacResult<Date> {
    scan(date, -1, calendar, weekend)
}

/// Walks from `start` one day at a time in direction `step` and returns the
/// first business day, inspecting `start` plus at most `MAX_SEARCH_DAYS`
/// further days.
fn scan(
    start: Date,
    step: i64,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> AlmanacResult<Date> {
    let mut date = start;
    for moved in 0..=MAX_SEARCH_DAYS {
        if is_business_day(date, calendar, weekend) {
            return Ok(date);
        }
        if moved < MAX_SEARCH_DAYS {
            date = date.checked_add_days(step)?;
        }
    }

    let direction = if step > 0 { "forward" } else { "backward" };
    warn!("no business day within {MAX_SEARCH_DAYS} days of {start} searching {direction}");
    Err(AlmanacError::BusinessDaySearchExhausted {
        start: start.to_string(),
        max_days: MAX_SEARCH_DAYS,
        direction,
    })
}
