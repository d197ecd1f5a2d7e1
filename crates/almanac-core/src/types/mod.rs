//! Domain types for calendar arithmetic.
//!
//! This module provides the value types shared by the rule and
//! calendar layers:
//!
//! - [`Date`]: a validated proleptic Gregorian date
//! - [`Weekday`] and [`WeekendDays`]: day-of-week encoding and weekend sets
//! - [`Period`] and [`TimeUnit`]: tenors such as `2W`, `6M`, `10Y`

mod date;
mod period;
mod weekday;

pub use date::{days_in_month, is_leap_year, Date};
pub use period::{Period, TimeUnit};
pub use weekday::{WeekendDays, Weekday};
