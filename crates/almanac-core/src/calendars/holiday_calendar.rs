//! Rule-based holiday calendar.

use log::trace;

use super::rules::{ExplicitDateRule, HolidayRule};
use crate::error::AlmanacResult;
use crate::types::Date;

/// A collection of holiday rules.
///
/// Rules are kept in insertion order, which only affects the order of
/// [`holiday_names`](Self::holiday_names). Cloning a calendar clones every
/// rule, so the copy shares nothing with the original.
///
/// # Example
///
/// ```
/// use almanac_core::calendars::{FixedDateRule, HolidayCalendar, NthWeekdayRule, Occurrence};
/// use almanac_core::types::{Date, Weekday};
///
/// let mut calendar = HolidayCalendar::new();
/// calendar.add_rule(FixedDateRule::new("Christmas", 12, 25).unwrap());
/// calendar.add_rule(
///     NthWeekdayRule::new("Thanksgiving", 11, Weekday::Thursday, Occurrence::Fourth).unwrap(),
/// );
/// calendar.add_holiday("Eclipse Day", Date::from_ymd(2024, 4, 8).unwrap());
///
/// assert!(calendar.is_holiday(Date::from_ymd(2024, 11, 28).unwrap()));
/// assert_eq!(calendar.holidays(2024).len(), 3);
/// assert_eq!(calendar.holidays(2025).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    rules: Vec<HolidayRule>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`add_rule`](Self::add_rule).
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<HolidayRule>) -> Self {
        self.add_rule(rule);
        self
    }

    /// Adds a one-off holiday on `date`.
    pub fn add_holiday(&mut self, name: impl Into<String>, date: Date) {
        self.rules.push(ExplicitDateRule::new(name, date).into());
    }

    /// Adds a one-off holiday from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the date does not exist; the
    /// calendar is left unchanged.
    pub fn add_holiday_ymd(
        &mut self,
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
    ) -> AlmanacResult<()> {
        let date = Date::from_ymd(year, month, day)?;
        self.add_holiday(name, date);
        Ok(())
    }

    /// Adds a rule. Rules are validated when they are built.
    pub fn add_rule(&mut self, rule: impl Into<HolidayRule>) {
        self.rules.push(rule.into());
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// The rules in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the calendar has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if any rule falls on `date`.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.matching_rules(date).next().is_some()
    }

    /// All holidays in `year`, sorted ascending with duplicates removed.
    #[must_use]
    pub fn holidays(&self, year: i32) -> Vec<Date> {
        let mut dates: Vec<Date> = self
            .rules
            .iter()
            .filter_map(|rule| Self::date_for(rule, year))
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Names of every holiday on `date`, in rule insertion order.
    #[must_use]
    pub fn holiday_names(&self, date: Date) -> Vec<&str> {
        self.matching_rules(date).map(HolidayRule::name).collect()
    }

    fn matching_rules(&self, date: Date) -> impl Iterator<Item = &HolidayRule> {
        let year = date.year();
        self.rules
            .iter()
            .filter(move |rule| Self::date_for(rule, year) == Some(date))
    }

    /// The rule's date in `year`; a rule that does not apply contributes nothing.
    fn date_for(rule: &HolidayRule, year: i32) -> Option<Date> {
        let date = rule.date_in(year);
        if date.is_none() {
            trace!("holiday rule '{}' does not apply to {year}", rule.name());
        }
        date
    }
}

impl<R: Into<HolidayRule>> FromIterator<R> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<R: Into<HolidayRule>> Extend<R> for HolidayCalendar {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.rules.extend(iter.into_iter().map(Into::into));
    }
}
