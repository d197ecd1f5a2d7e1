//! # Almanac Core
//!
//! Holiday calendars and business day arithmetic.
//!
//! This crate provides:
//!
//! - **Types**: `Date`, `Weekday`, `WeekendDays`, and tenor `Period`s
//! - **Holiday Rules**: explicit dates, fixed month/day, Nth or last weekday of a month
//! - **Holiday Calendars**: rule collections answering "is this a holiday?"
//! - **Business Days**: classification, convention-based adjustment and tenor advancement
//!
//! Everything is computed on demand from the rules; nothing is cached and
//! no I/O is performed.
//!
//! ## Example
//!
//! ```rust
//! use almanac_core::prelude::*;
//!
//! let mut calendar = HolidayCalendar::new();
//! calendar.add_rule(FixedDateRule::new("Independence Day", 7, 4).unwrap());
//! calendar.add_rule(
//!     NthWeekdayRule::new("Labor Day", 9, Weekday::Monday, Occurrence::First).unwrap(),
//! );
//!
//! let weekend = WeekendDays::default();
//! let trade = Date::from_ymd(2024, 8, 2).unwrap();
//!
//! // 2024-08-02 + 1M = 2024-09-02, Labor Day, rolled to Tuesday
//! let settle = advance(
//!     trade,
//!     Period::parse("1M").unwrap(),
//!     BusinessDayConvention::ModifiedFollowing,
//!     &calendar,
//!     &weekend,
//! )
//! .unwrap();
//! assert_eq!(settle, Date::from_ymd(2024, 9, 3).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        adjust, advance, advance_tenor, is_business_day, BusinessDayConvention,
        CalendarDefinition, ExplicitDateRule, FixedDateRule, HolidayCalendar, HolidayRule,
        NthWeekdayRule, Occurrence,
    };
    pub use crate::error::{AlmanacError, AlmanacResult};
    pub use crate::types::{Date, Period, TimeUnit, WeekendDays, Weekday};
}

// Re-export commonly used types at crate root
pub use calendars::{BusinessDayConvention, HolidayCalendar, HolidayRule};
pub use error::{AlmanacError, AlmanacResult};
pub use types::{Date, Period, WeekendDays, Weekday};
