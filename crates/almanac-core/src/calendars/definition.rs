//! JSON calendar definitions.
//!
//! A definition describes a weekend and a list of holiday rules, and builds
//! into a [`HolidayCalendar`] plus the matching [`WeekendDays`].
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "US Federal",
//!   "weekend": [0, 6],
//!   "rules": [
//!     { "kind": "fixed", "name": "Independence Day", "month": 7, "day": 4 },
//!     { "kind": "nth_weekday", "name": "Memorial Day", "month": 5, "weekday": 1, "occurrence": "last" },
//!     { "kind": "explicit", "name": "National Day of Mourning", "date": "2025-01-09" }
//!   ]
//! }
//! ```
//!
//! `weekend` is optional and defaults to Saturday and Sunday. Weekdays are
//! encoded 0 (Sunday) to 6 (Saturday); occurrences are 1 to 5, -1 or `"last"`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::rules::{ExplicitDateRule, FixedDateRule, HolidayRule, NthWeekdayRule, Occurrence};
use super::HolidayCalendar;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::{Date, WeekendDays, Weekday};

/// Serializable description of a holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDefinition {
    /// Name of the calendar
    pub name: String,

    /// Weekend days (optional, defaults to Saturday and Sunday)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend: Option<WeekendDays>,

    /// Holiday rules in insertion order
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// Serializable form of a single [`HolidayRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleDefinition {
    /// A one-off holiday.
    Explicit {
        /// Holiday name
        name: String,
        /// ISO date
        date: Date,
    },
    /// The same month and day every year.
    Fixed {
        /// Holiday name
        name: String,
        /// Month (1-12)
        month: u32,
        /// Day of month (1-31)
        day: u32,
    },
    /// The Nth or last given weekday of a month.
    NthWeekday {
        /// Holiday name
        name: String,
        /// Month (1-12)
        month: u32,
        /// Weekday, 0 (Sunday) to 6 (Saturday)
        weekday: Weekday,
        /// 1 to 5, or `"last"`
        occurrence: Occurrence,
    },
}

impl RuleDefinition {
    /// Validates the definition and builds the rule.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` if the month or day is out of
    /// range.
    pub fn build(&self) -> AlmanacResult<HolidayRule> {
        let rule = match self {
            RuleDefinition::Explicit { name, date } => {
                ExplicitDateRule::new(name.clone(), *date).into()
            }
            RuleDefinition::Fixed { name, month, day } => {
                FixedDateRule::new(name.clone(), *month, *day)?.into()
            }
            RuleDefinition::NthWeekday {
                name,
                month,
                weekday,
                occurrence,
            } => NthWeekdayRule::new(name.clone(), *month, *weekday, *occurrence)?.into(),
        };
        Ok(rule)
    }
}

impl From<&HolidayRule> for RuleDefinition {
    fn from(rule: &HolidayRule) -> Self {
        match rule {
            HolidayRule::ExplicitDate(r) => RuleDefinition::Explicit {
                name: r.name().to_string(),
                date: r.date(),
            },
            HolidayRule::FixedDate(r) => RuleDefinition::Fixed {
                name: r.name().to_string(),
                month: r.month(),
                day: r.day(),
            },
            HolidayRule::NthWeekday(r) => RuleDefinition::NthWeekday {
                name: r.name().to_string(),
                month: r.month(),
                weekday: r.weekday(),
                occurrence: r.occurrence(),
            },
        }
    }
}

impl CalendarDefinition {
    /// Creates an empty definition with the default weekend.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weekend: None,
            rules: Vec::new(),
        }
    }

    /// Describes an existing calendar.
    pub fn from_calendar(
        name: impl Into<String>,
        calendar: &HolidayCalendar,
        weekend: WeekendDays,
    ) -> Self {
        Self {
            name: name.into(),
            weekend: Some(weekend),
            rules: calendar.rules().iter().map(RuleDefinition::from).collect(),
        }
    }

    /// Parses a definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::CalendarDefinition` if the JSON is malformed or
    /// holds an unknown rule kind, weekday or occurrence.
    pub fn from_json(json: &str) -> AlmanacResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AlmanacError::calendar_definition(format!("Failed to parse JSON: {e}")))
    }

    /// Serializes the definition to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::CalendarDefinition` if serialization fails.
    pub fn to_json(&self) -> AlmanacResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AlmanacError::calendar_definition(format!("Failed to serialize JSON: {e}"))
        })
    }

    /// Set the weekend days.
    #[must_use]
    pub fn with_weekend(mut self, weekend: WeekendDays) -> Self {
        self.weekend = Some(weekend);
        self
    }

    /// Add a rule definition.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleDefinition) -> Self {
        self.rules.push(rule);
        self
    }

    /// Weekend days, falling back to Saturday and Sunday.
    #[must_use]
    pub fn weekend_days(&self) -> WeekendDays {
        self.weekend.unwrap_or_default()
    }

    /// Builds the calendar and its weekend.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rule that fails validation.
    pub fn build(&self) -> AlmanacResult<(HolidayCalendar, WeekendDays)> {
        let calendar = self
            .rules
            .iter()
            .map(RuleDefinition::build)
            .collect::<AlmanacResult<HolidayCalendar>>()?;
        let weekend = self.weekend_days();

        debug!(
            "built calendar '{}' with {} rules, weekend {weekend:?}",
            self.name,
            calendar.len()
        );
        Ok((calendar, weekend))
    }
}
