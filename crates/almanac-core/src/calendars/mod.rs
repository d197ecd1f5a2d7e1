//! Holiday rules, holiday calendars and business day conventions.
//!
//! This module provides:
//! - Holiday rules: explicit dates, fixed month/day, Nth or last weekday
//! - [`HolidayCalendar`], an ordered collection of rules
//! - Business day classification, adjustment and date advancement
//! - [`CalendarDefinition`] for loading calendars from JSON

mod conventions;
mod definition;
mod holiday_calendar;
mod rules;

pub use conventions::{
    add_business_days, adjust, advance, advance_tenor, business_days_between, is_business_day,
    next_business_day, previous_business_day, BusinessDayConvention, MAX_SEARCH_DAYS,
};
pub use definition::{CalendarDefinition, RuleDefinition};
pub use holiday_calendar::HolidayCalendar;
pub use rules::{ExplicitDateRule, FixedDateRule, HolidayRule, NthWeekdayRule, Occurrence};
