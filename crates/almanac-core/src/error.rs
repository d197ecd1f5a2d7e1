//! Error types for the Almanac library.
//!
//! Every fallible operation returns [`AlmanacResult`]. Aggregate calendar
//! queries never surface [`AlmanacError::RuleNotApplicable`]; that variant is
//! only seen by callers who ask a single rule for a year it does not cover.

use std::fmt;

use thiserror::Error;

/// A specialized Result type for Almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// Why a holiday rule produced no date for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotApplicableReason {
    /// An explicit-date rule was asked about a year other than its own.
    DateNotInYear,
    /// The requested weekday occurrence does not exist in the month.
    OccurrenceNotFound,
}

impl fmt::Display for NotApplicableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotApplicableReason::DateNotInYear => {
                write!(f, "explicit date does not exist in this year")
            }
            NotApplicableReason::OccurrenceNotFound => {
                write!(f, "requested occurrence does not exist in this month")
            }
        }
    }
}

/// The main error type for Almanac operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    /// Rule construction parameters are out of range.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the offending parameter.
        reason: String,
    },

    /// A (year, month, day) combination does not exist in the calendar.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A holiday rule does not produce a date for the requested year.
    #[error("Rule '{rule}' not applicable to {year}: {reason}")]
    RuleNotApplicable {
        /// Name of the rule.
        rule: String,
        /// Year that was queried.
        year: i32,
        /// Why the rule does not apply.
        reason: NotApplicableReason,
    },

    /// A tenor string could not be parsed.
    #[error("Cannot parse period '{input}': {reason}")]
    PeriodParse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No business day was found within the search bound.
    #[error("No business day within {max_days} days of {start} searching {direction}")]
    BusinessDaySearchExhausted {
        /// The date the search started from.
        start: String,
        /// Maximum number of days inspected.
        max_days: u32,
        /// `"forward"` or `"backward"`.
        direction: &'static str,
    },

    /// An enumerated value reached a match arm that does not handle it.
    #[error("Unhandled case: {context}")]
    UnhandledCase {
        /// Where the value was encountered.
        context: String,
    },

    /// A calendar definition could not be read.
    #[error("Calendar definition error: {reason}")]
    CalendarDefinition {
        /// Description of the error.
        reason: String,
    },
}

impl AlmanacError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a rule-not-applicable error.
    #[must_use]
    pub fn not_applicable(rule: impl Into<String>, year: i32, reason: NotApplicableReason) -> Self {
        Self::RuleNotApplicable {
            rule: rule.into(),
            year,
            reason,
        }
    }

    /// Creates a period parse error.
    #[must_use]
    pub fn period_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PeriodParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a calendar definition error.
    #[must_use]
    pub fn calendar_definition(reason: impl Into<String>) -> Self {
        Self::CalendarDefinition {
            reason: reason.into(),
        }
    }

    /// Returns true if this error means a rule simply has no date that year.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::RuleNotApplicable { .. })
    }
}
