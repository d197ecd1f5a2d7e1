//! Days of the week and weekend-day sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult};

/// Day of the week, encoded 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    /// Sunday (0)
    Sunday = 0,
    /// Monday (1)
    Monday = 1,
    /// Tuesday (2)
    Tuesday = 2,
    /// Wednesday (3)
    Wednesday = 3,
    /// Thursday (4)
    Thursday = 4,
    /// Friday (5)
    Friday = 5,
    /// Saturday (6)
    Saturday = 6,
}

impl Weekday {
    /// All seven days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Builds a weekday from its 0 (Sunday) .. 6 (Saturday) encoding.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` for values above 6.
    pub fn from_index(index: u8) -> AlmanacResult<Self> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| {
                AlmanacError::invalid_argument(format!(
                    "weekday must be between 0 and 6, got {index}"
                ))
            })
    }

    /// Returns the 0 (Sunday) .. 6 (Saturday) encoding.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Number of days to move forward from `self` to reach `target`.
    #[must_use]
    pub fn days_until(self, target: Weekday) -> u8 {
        (target.index() + 7 - self.index()) % 7
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = AlmanacError;

    fn try_from(index: u8) -> AlmanacResult<Self> {
        Self::from_index(index)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}

/// The set of weekdays treated as non-business days.
///
/// Stored as a 7-bit mask. The default is Saturday and Sunday; any
/// combination is allowed, including the empty set and all seven days.
///
/// # Example
///
/// ```
/// use almanac_core::types::{WeekendDays, Weekday};
///
/// let gulf = WeekendDays::from_days([Weekday::Friday, Weekday::Saturday]);
/// assert!(gulf.contains(Weekday::Friday));
/// assert!(!gulf.contains(Weekday::Sunday));
/// assert!(WeekendDays::default().contains(Weekday::Sunday));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekendDays(u8);

impl WeekendDays {
    const ALL_MASK: u8 = 0b111_1111;

    /// Saturday and Sunday.
    #[must_use]
    pub const fn saturday_sunday() -> Self {
        Self((1 << Weekday::Saturday as u8) | (1 << Weekday::Sunday as u8))
    }

    /// No weekend days at all.
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    /// Every day of the week. No date is ever a business day.
    #[must_use]
    pub const fn all() -> Self {
        Self(Self::ALL_MASK)
    }

    /// Builds a set from any collection of weekdays.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::none();
        for day in days {
            set.insert(day);
        }
        set
    }

    /// Builds a set from 0 (Sunday) .. 6 (Saturday) encoded values.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidArgument` if any value is above 6.
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> AlmanacResult<Self> {
        let mut set = Self::none();
        for index in indices {
            set.insert(Weekday::from_index(index)?);
        }
        Ok(set)
    }

    /// Adds a day to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.index();
    }

    /// Removes a day from the set.
    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !(1 << day.index());
    }

    /// Returns true if `day` is a weekend day.
    #[inline]
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.index()) != 0
    }

    /// Number of weekend days in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no day is a weekend day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if every day of the week is a weekend day.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL_MASK
    }

    /// Iterates the contained days, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl Default for WeekendDays {
    fn default() -> Self {
        Self::saturday_sunday()
    }
}

impl fmt::Debug for WeekendDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Weekday> for WeekendDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_days(iter)
    }
}

impl From<Vec<Weekday>> for WeekendDays {
    fn from(days: Vec<Weekday>) -> Self {
        Self::from_days(days)
    }
}

impl From<WeekendDays> for Vec<Weekday> {
    fn from(set: WeekendDays) -> Self {
        set.iter().collect()
    }
}
