//! Holiday rules.
//!
//! A [`HolidayRule`] answers two questions for a given year: does the rule
//! produce a holiday at all ([`HolidayRule::applies_to`]), and if so on which
//! date ([`HolidayRule::calculate_date`]). Three kinds of rule exist:
//!
//! - [`ExplicitDateRule`]: a single, one-off date
//! - [`FixedDateRule`]: the same month and day every year (Christmas)
//! - [`NthWeekdayRule`]: the Nth or last weekday of a month (Thanksgiving)
//!
//! Parameters are validated at construction. Whether a day exists in a
//! particular year (February 29, a fifth Monday) is only known once the
//! year is given, so that check happens in `applies_to` / `calculate_date`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult, NotApplicableReason};
use crate::types::{days_in_month, Date, Weekday};

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OccurrenceRepr", into = "OccurrenceRepr")]
pub enum Occurrence {
    /// 1st occurrence
    First,
    /// 2nd occurrence
    Second,
    /// 3rd occurrence
    Third,
    /// 4th occurrence
    Fourth,
    /// 5th occurrence (does not exist in every month)
    Fifth,
    /// Last occurrence in the month
    Last,
}

impl Occurrence {
    /// Builds an occurrence from its ordinal: 1 through 5, or -1 for last.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` for any other value.
    pub fn from_ordinal(ordinal: i32) -> AlmanacResult<Self> {
        match ordinal {
            1 => Ok(Occurrence::First),
            2 => Ok(Occurrence::Second),
            3 => Ok(Occurrence::Third),
            4 => Ok(Occurrence::Fourth),
            5 => Ok(Occurrence::Fifth),
            -1 => Ok(Occurrence::Last),
            _ => Err(AlmanacError::invalid_argument(format!(
                "occurrence must be 1 through 5 or -1 (last), got {ordinal}"
            ))),
        }
    }

    /// Returns 1 through 5, or -1 for [`Occurrence::Last`].
    #[must_use]
    pub fn ordinal(self) -> i32 {
        match self {
            Occurrence::First => 1,
            Occurrence::Second => 2,
            Occurrence::Third => 3,
            Occurrence::Fourth => 4,
            Occurrence::Fifth => 5,
            Occurrence::Last => -1,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Occurrence::First => "1st",
            Occurrence::Second => "2nd",
            Occurrence::Third => "3rd",
            Occurrence::Fourth => "4th",
            Occurrence::Fifth => "5th",
            Occurrence::Last => "last",
        };
        write!(f, "{name}")
    }
}

/// Wire form of an [`Occurrence`]: `1`..`5`, `-1`, or `"last"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OccurrenceRepr {
    Ordinal(i32),
    Keyword(String),
}

impl TryFrom<OccurrenceRepr> for Occurrence {
    type Error = AlmanacError;

    fn try_from(repr: OccurrenceRepr) -> AlmanacResult<Self> {
        match repr {
            OccurrenceRepr::Ordinal(n) => Occurrence::from_ordinal(n),
            OccurrenceRepr::Keyword(word) if word.eq_ignore_ascii_case("last") => {
                Ok(Occurrence::Last)
            }
            OccurrenceRepr::Keyword(word) => Err(AlmanacError::invalid_argument(format!(
                "unknown occurrence '{word}'"
            ))),
        }
    }
}

impl From<Occurrence> for OccurrenceRepr {
    fn from(occurrence: Occurrence) -> Self {
        match occurrence {
            Occurrence::Last => OccurrenceRepr::Keyword("last".to_string()),
            other => OccurrenceRepr::Ordinal(other.ordinal()),
        }
    }
}

fn validate_month(month: u32) -> AlmanacResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(AlmanacError::invalid_argument(format!(
            "month must be between 1 and 12, got {month}"
        )))
    }
}

/// A holiday on one specific date, e.g. a one-off national day of mourning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExplicitDateRule {
    name: String,
    date: Date,
}

impl ExplicitDateRule {
    /// Creates a rule for a single date.
    pub fn new(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }

    /// Name of the holiday.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// True only for the year of the stored date.
    #[must_use]
    pub fn applies_to(&self, year: i32) -> bool {
        self.date.year() == year
    }

    /// Returns the stored date if `year` matches it.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::RuleNotApplicable` for any other year.
    pub fn calculate_date(&self, year: i32) -> AlmanacResult<Date> {
        if self.applies_to(year) {
            Ok(self.date)
        } else {
            Err(AlmanacError::not_applicable(
                &self.name,
                year,
                NotApplicableReason::DateNotInYear,
            ))
        }
    }
}

/// A holiday on the same month and day every year.
///
/// # Example
///
/// ```
/// use almanac_core::calendars::FixedDateRule;
/// use almanac_core::types::Date;
///
/// let christmas = FixedDateRule::new("Christmas", 12, 25).unwrap();
/// assert_eq!(christmas.calculate_date(2024).unwrap(), Date::from_ymd(2024, 12, 25).unwrap());
///
/// let leap_day = FixedDateRule::new("Leap Day", 2, 29).unwrap();
/// assert!(leap_day.applies_to(2024));
/// assert!(!leap_day.applies_to(2025));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedDateRule {
    name: String,
    month: u32,
    day: u32,
}

impl FixedDateRule {
    /// Creates a fixed-date rule.
    ///
    /// Only the ranges are checked here; `(2, 30)` is accepted and simply
    /// never applies.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` if `month` is outside 1-12 or
    /// `day` is outside 1-31.
    pub fn new(name: impl Into<String>, month: u32, day: u32) -> AlmanacResult<Self> {
        validate_month(month)?;
        if !(1..=31).contains(&day) {
            return Err(AlmanacError::invalid_argument(format!(
                "day must be between 1 and 31, got {day}"
            )));
        }
        Ok(Self {
            name: name.into(),
            month,
            day,
        })
    }

    /// Name of the holiday.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Month of the holiday (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the holiday (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// True if the month/day exists in `year`.
    #[must_use]
    pub fn applies_to(&self, year: i32) -> bool {
        Date::from_ymd(year, self.month, self.day).is_ok()
    }

    /// Returns the holiday in `year`.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the month/day does not exist in
    /// `year` (February 29 outside leap years, February 30 always).
    pub fn calculate_date(&self, year: i32) -> AlmanacResult<Date> {
        Date::from_ymd(year, self.month, self.day).map_err(|_| {
            AlmanacError::invalid_date(format!(
                "'{}' falls on {year}-{:02}-{:02}, which does not exist",
                self.name, self.month, self.day
            ))
        })
    }
}

/// A holiday on the Nth (or last) occurrence of a weekday in a month.
///
/// # Example
///
/// ```
/// use almanac_core::calendars::{NthWeekdayRule, Occurrence};
/// use almanac_core::types::{Date, Weekday};
///
/// let thanksgiving =
///     NthWeekdayRule::new("Thanksgiving", 11, Weekday::Thursday, Occurrence::Fourth).unwrap();
/// assert_eq!(thanksgiving.calculate_date(2024).unwrap(), Date::from_ymd(2024, 11, 28).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NthWeekdayRule {
    name: String,
    month: u32,
    weekday: Weekday,
    occurrence: Occurrence,
}

impl NthWeekdayRule {
    /// Creates an Nth-weekday rule.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` if `month` is outside 1-12.
    pub fn new(
        name: impl Into<String>,
        month: u32,
        weekday: Weekday,
        occurrence: Occurrence,
    ) -> AlmanacResult<Self> {
        validate_month(month)?;
        Ok(Self {
            name: name.into(),
            month,
            weekday,
            occurrence,
        })
    }

    /// Creates a rule from raw encodings: weekday 0 (Sunday) .. 6 (Saturday)
    /// and occurrence 1 .. 5 or -1 (last).
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` if any value is out of range.
    pub fn from_encoded(
        name: impl Into<String>,
        month: u32,
        weekday: u8,
        occurrence: i32,
    ) -> AlmanacResult<Self> {
        Self::new(
            name,
            month,
            Weekday::from_index(weekday)?,
            Occurrence::from_ordinal(occurrence)?,
        )
    }

    /// Name of the holiday.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Month of the holiday (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Target weekday.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Which occurrence of the weekday.
    #[must_use]
    pub fn occurrence(&self) -> Occurrence {
        self.occurrence
    }

    /// True if the requested occurrence exists in the month of `year`.
    ///
    /// The last occurrence always exists.
    #[must_use]
    pub fn applies_to(&self, year: i32) -> bool {
        match self.occurrence {
            Occurrence::Last => Date::from_ymd(year, self.month, 1).is_ok(),
            _ => self.calculate_date(year).is_ok(),
        }
    }

    /// Returns the holiday in `year`.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::RuleNotApplicable` if the occurrence does not
    /// exist (a fifth weekday in a month that has only four), or
    /// `AlmanacError::InvalidDate` if `year` is outside the supported range.
    pub fn calculate_date(&self, year: i32) -> AlmanacResult<Date> {
        let last_day = days_in_month(year, self.month);

        let day = match self.occurrence {
            Occurrence::Last => {
                let last = Date::from_ymd(year, self.month, last_day)?;
                last_day - u32::from(self.weekday.days_until(last.weekday()))
            }
            occurrence => {
                let first = Date::from_ymd(year, self.month, 1)?;
                let weeks = occurrence.ordinal().unsigned_abs() - 1;
                let day = 1 + u32::from(first.weekday().days_until(self.weekday)) + weeks * 7;
                if day > last_day {
                    return Err(AlmanacError::not_applicable(
                        &self.name,
                        year,
                        NotApplicableReason::OccurrenceNotFound,
                    ));
                }
                day
            }
        };

        Date::from_ymd(year, self.month, day)
    }
}

/// Any holiday rule.
///
/// A closed set of variants with value semantics: cloning a rule (or a
/// calendar holding rules) produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// One specific date.
    ExplicitDate(ExplicitDateRule),
    /// Same month/day every year.
    FixedDate(FixedDateRule),
    /// Nth or last weekday of a month.
    NthWeekday(NthWeekdayRule),
}

impl HolidayRule {
    /// Name of the holiday.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            HolidayRule::ExplicitDate(rule) => &rule.name,
            HolidayRule::FixedDate(rule) => &rule.name,
            HolidayRule::NthWeekday(rule) => &rule.name,
        }
    }

    /// True if the rule produces a holiday in `year`.
    #[must_use]
    pub fn applies_to(&self, year: i32) -> bool {
        match self {
            HolidayRule::ExplicitDate(rule) => rule.applies_to(year),
            HolidayRule::FixedDate(rule) => rule.applies_to(year),
            HolidayRule::NthWeekday(rule) => rule.applies_to(year),
        }
    }

    /// Returns the holiday in `year`.
    ///
    /// Check [`applies_to`](Self::applies_to) first; asking for a year the
    /// rule does not cover is an error.
    ///
    /// # Errors
    ///
    /// Returns the variant-specific error when the rule does not apply.
    pub fn calculate_date(&self, year: i32) -> AlmanacResult<Date> {
        match self {
            HolidayRule::ExplicitDate(rule) => rule.calculate_date(year),
            HolidayRule::FixedDate(rule) => rule.calculate_date(year),
            HolidayRule::NthWeekday(rule) => rule.calculate_date(year),
        }
    }

    /// The holiday date in `year`, or `None` if the rule does not apply.
    #[must_use]
    pub fn date_in(&self, year: i32) -> Option<Date> {
        if self.applies_to(year) {
            self.calculate_date(year).ok()
        } else {
            None
        }
    }
}

impl From<ExplicitDateRule> for HolidayRule {
    fn from(rule: ExplicitDateRule) -> Self {
        HolidayRule::ExplicitDate(rule)
    }
}

impl From<FixedDateRule> for HolidayRule {
    fn from(rule: FixedDateRule) -> Self {
        HolidayRule::FixedDate(rule)
    }
}

impl From<NthWeekdayRule> for HolidayRule {
    fn from(rule: NthWeekdayRule) -> Self {
        HolidayRule::NthWeekday(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_explicit_date_rule() {
        let halloween = ExplicitDateRule::new("Halloween 2024", date(2024, 10, 31));
        assert!(halloween.applies_to(2024));
        assert!(!halloween.applies_to(2025));
        assert_eq!(halloween.calculate_date(2024).unwrap(), date(2024, 10, 31));

        let err = halloween.calculate_date(2025).unwrap_err();
        assert_eq!(
            err,
            AlmanacError::not_applicable("Halloween 2024", 2025, NotApplicableReason::DateNotInYear)
        );
    }

    #[test]
    fn test_fixed_date_rule() {
        let christmas = FixedDateRule::new("Christmas", 12, 25).unwrap();
        assert!(christmas.applies_to(2024));
        assert_eq!(christmas.calculate_date(2024).unwrap(), date(2024, 12, 25));
        assert_eq!(christmas.calculate_date(2025).unwrap(), date(2025, 12, 25));
    }

    #[test]
    fn test_fixed_date_rule_construction() {
        assert!(FixedDateRule::new("New Year's Day", 1, 1).is_ok());
        for (month, day) in [(0, 1), (13, 1), (1, 0), (1, 32)] {
            assert!(matches!(
                FixedDateRule::new("Invalid", month, day),
                Err(AlmanacError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_fixed_date_rule_invalid_combination() {
        let feb30 = FixedDateRule::new("Invalid Feb 30", 2, 30).unwrap();
        assert!(!feb30.applies_to(2024));
        assert!(matches!(
            feb30.calculate_date(2024),
            Err(AlmanacError::InvalidDate { .. })
        ));

        let leap_day = FixedDateRule::new("Leap Day", 2, 29).unwrap();
        assert!(leap_day.applies_to(2024));
        assert!(!leap_day.applies_to(2023));
        assert!(!leap_day.applies_to(2100));
        assert!(leap_day.applies_to(2000));
    }

    #[test]
    fn test_nth_weekday_thanksgiving() {
        let rule = NthWeekdayRule::new("Thanksgiving", 11, Weekday::Thursday, Occurrence::Fourth)
            .unwrap();
        assert_eq!(rule.calculate_date(2024).unwrap(), date(2024, 11, 28));
        assert_eq!(rule.calculate_date(2025).unwrap(), date(2025, 11, 27));
        assert_eq!(rule.calculate_date(2024).unwrap().weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_nth_weekday_first_on_first_day() {
        // 2024-09-01 is a Sunday, so the first Sunday is the 1st.
        let rule = NthWeekdayRule::new("First Sunday", 9, Weekday::Sunday, Occurrence::First)
            .unwrap();
        assert_eq!(rule.calculate_date(2024).unwrap(), date(2024, 9, 1));

        let labor_day =
            NthWeekdayRule::new("Labor Day", 9, Weekday::Monday, Occurrence::First).unwrap();
        assert_eq!(labor_day.calculate_date(2024).unwrap(), date(2024, 9, 2));
    }

    #[test]
    fn test_nth_weekday_last() {
        let memorial =
            NthWeekdayRule::new("Memorial Day", 5, Weekday::Monday, Occurrence::Last).unwrap();
        assert_eq!(memorial.calculate_date(2024).unwrap(), date(2024, 5, 27));
        assert_eq!(memorial.calculate_date(2025).unwrap(), date(2025, 5, 26));
        assert!(memorial.applies_to(2024));

        // 2024-08-31 is a Saturday, so the last Saturday is the last day.
        let last_sat =
            NthWeekdayRule::new("Last Saturday", 8, Weekday::Saturday, Occurrence::Last).unwrap();
        assert_eq!(last_sat.calculate_date(2024).unwrap(), date(2024, 8, 31));

        let last_feb =
            NthWeekdayRule::new("Last Thursday", 2, Weekday::Thursday, Occurrence::Last).unwrap();
        assert_eq!(last_feb.calculate_date(2024).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_nth_weekday_fifth_missing() {
        // February 2024 has four Saturdays; June 2024 has five.
        let fifth_sat =
            NthWeekdayRule::new("Fifth Saturday", 2, Weekday::Saturday, Occurrence::Fifth).unwrap();
        assert!(!fifth_sat.applies_to(2024));
        assert!(fifth_sat.calculate_date(2024).unwrap_err().is_not_applicable());

        let fifth_sat_june =
            NthWeekdayRule::new("Fifth Saturday", 6, Weekday::Saturday, Occurrence::Fifth).unwrap();
        assert!(fifth_sat_june.applies_to(2024));
        assert_eq!(fifth_sat_june.calculate_date(2024).unwrap(), date(2024, 6, 29));
    }

    #[test]
    fn test_nth_weekday_construction() {
        assert!(NthWeekdayRule::from_encoded("Thanksgiving", 11, 4, 4).is_ok());
        assert!(NthWeekdayRule::from_encoded("Memorial Day", 5, 1, -1).is_ok());

        let invalid = [(0, 1, 1), (13, 1, 1), (1, 7, 1), (1, 1, 0), (1, 1, 6), (1, 1, -2)];
        for (month, weekday, occurrence) in invalid {
            assert!(matches!(
                NthWeekdayRule::from_encoded("Invalid", month, weekday, occurrence),
                Err(AlmanacError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_holiday_rule_dispatch() {
        let rules: Vec<HolidayRule> = vec![
            ExplicitDateRule::new("Eclipse Day", date(2024, 4, 8)).into(),
            FixedDateRule::new("Christmas", 12, 25).unwrap().into(),
            NthWeekdayRule::new("Labor Day", 9, Weekday::Monday, Occurrence::First)
                .unwrap()
                .into(),
        ];

        let names: Vec<&str> = rules.iter().map(HolidayRule::name).collect();
        assert_eq!(names, vec!["Eclipse Day", "Christmas", "Labor Day"]);

        let dates: Vec<Option<Date>> = rules.iter().map(|r| r.date_in(2025)).collect();
        assert_eq!(
            dates,
            vec![None, Some(date(2025, 12, 25)), Some(date(2025, 9, 1))]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original: HolidayRule = FixedDateRule::new("Christmas", 12, 25).unwrap().into();
        let cloned = original.clone();
        assert_eq!(cloned.name(), original.name());
        assert_eq!(
            cloned.calculate_date(2024).unwrap(),
            original.calculate_date(2024).unwrap()
        );
    }

    #[test]
    fn test_occurrence_serde() {
        let json = serde_json::to_string(&Occurrence::Third).unwrap();
        assert_eq!(json, "3");
        let json = serde_json::to_string(&Occurrence::Last).unwrap();
        assert_eq!(json, "\"last\"");

        let parsed: Occurrence = serde_json::from_str("\"Last\"").unwrap();
        assert_eq!(parsed, Occurrence::Last);
        let parsed: Occurrence = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, Occurrence::Last);
        assert!(serde_json::from_str::<Occurrence>("0").is_err());
        assert!(serde_json::from_str::<Occurrence>("\"first\"").is_err());
    }
}
