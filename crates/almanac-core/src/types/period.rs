//! Tenor periods such as `2W`, `6M` or `10Y`.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult};

/// Unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days
    Days,
    /// Weeks of seven days
    Weeks,
    /// Calendar months
    Months,
    /// Calendar years
    Years,
}

impl TimeUnit {
    /// Single-letter tenor code (`D`, `W`, `M`, `Y`).
    #[must_use]
    pub fn code(self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        }
    }

    /// Parses a tenor code, case-insensitively.
    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'D' => Some(TimeUnit::Days),
            'W' => Some(TimeUnit::Weeks),
            'M' => Some(TimeUnit::Months),
            'Y' => Some(TimeUnit::Years),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Days => "Days",
            TimeUnit::Weeks => "Weeks",
            TimeUnit::Months => "Months",
            TimeUnit::Years => "Years",
        };
        write!(f, "{name}")
    }
}

/// A signed length of time in days, weeks, months or years.
///
/// # Example
///
/// ```rust
/// use almanac_core::types::{Period, TimeUnit};
///
/// let tenor = Period::parse("10Y").unwrap();
/// assert_eq!(tenor, Period::new(10, TimeUnit::Years));
/// assert_eq!("-2w".parse::<Period>().unwrap().to_string(), "-2W");
/// assert!(Period::parse("5X").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    value: i32,
    unit: TimeUnit,
}

impl Period {
    /// Creates a period from a value and unit.
    #[must_use]
    pub const fn new(value: i32, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Shorthand for `n` days.
    #[must_use]
    pub const fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// Shorthand for `n` weeks.
    #[must_use]
    pub const fn weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// Shorthand for `n` months.
    #[must_use]
    pub const fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// Shorthand for `n` years.
    #[must_use]
    pub const fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// Parses a tenor string of the form `[+-]?[0-9]+[DdWwMmYy]`.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::PeriodParse` if the string is empty, has no
    /// digits, has anything other than one unit letter after the digits,
    /// uses an unknown unit, or the number does not fit in an `i32`.
    pub fn parse(s: &str) -> AlmanacResult<Self> {
        if s.is_empty() {
            return Err(AlmanacError::period_parse(s, "period string cannot be empty"));
        }

        let digits_start = usize::from(s.starts_with(|c: char| c == '+' || c == '-'));
        let digits_end = digits_start
            + s[digits_start..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();

        if digits_end == digits_start {
            return Err(AlmanacError::period_parse(
                s,
                "period string must contain a numeric value",
            ));
        }

        let mut rest = s[digits_end..].chars();
        let (Some(code), None) = (rest.next(), rest.next()) else {
            return Err(AlmanacError::period_parse(
                s,
                "period string must end with a single unit character (D/W/M/Y)",
            ));
        };

        let value: i32 = s[..digits_end]
            .parse()
            .map_err(|_| AlmanacError::period_parse(s, "numeric value out of range"))?;

        let unit = TimeUnit::from_code(code).ok_or_else(|| {
            AlmanacError::period_parse(s, format!("invalid unit '{code}', must be D, W, M, or Y"))
        })?;

        Ok(Self::new(value, unit))
    }

    /// Returns the signed number of units.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl Neg for Period {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.value.saturating_neg(), self.unit)
    }
}

impl FromStr for Period {
    type Err = AlmanacError;

    fn from_str(s: &str) -> AlmanacResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = AlmanacError;

    fn try_from(s: String) -> AlmanacResult<Self> {
        Self::parse(&s)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(Period::parse("2W").unwrap(), Period::weeks(2));
        assert_eq!(Period::parse("6M").unwrap(), Period::months(6));
        assert_eq!(Period::parse("10Y").unwrap(), Period::new(10, TimeUnit::Years));
        assert_eq!(Period::parse("1d").unwrap(), Period::days(1));
        assert_eq!(Period::parse("3m").unwrap(), Period::months(3));
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(Period::parse("-10D").unwrap(), Period::days(-10));
        assert_eq!(Period::parse("+5D").unwrap(), Period::days(5));
        assert_eq!(Period::parse("0D").unwrap(), Period::days(0));
        assert_eq!(Period::parse("007Y").unwrap(), Period::years(7));
    }

    #[test]
    fn test_parse_rejects() {
        for input in ["", "D", "-D", "+", "5", "5X", "5DD", "5 D", " 5D", "1.5Y", "--5D", "5Dé"] {
            let err = Period::parse(input).unwrap_err();
            assert!(
                matches!(err, AlmanacError::PeriodParse { .. }),
                "unexpected error for {input:?}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(Period::parse("2147483647D").unwrap().value(), i32::MAX);
        assert_eq!(Period::parse("-2147483648D").unwrap().value(), i32::MIN);
        assert!(Period::parse("2147483648D").is_err());
        assert!(Period::parse("99999999999999999999Y").is_err());
    }

    #[test]
    fn test_display_and_neg() {
        assert_eq!(Period::months(3).to_string(), "3M");
        assert_eq!((-Period::months(6)).to_string(), "-6M");
        assert_eq!("2w".parse::<Period>().unwrap().to_string(), "2W");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Period::months(6)).unwrap();
        assert_eq!(json, "\"6M\"");
        let parsed: Period = serde_json::from_str("\"-1y\"").unwrap();
        assert_eq!(parsed, Period::years(-1));
        assert!(serde_json::from_str::<Period>("\"6Q\"").is_err());
    }
}
