use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::{InvalidDay, WeekDay};

/// A set of week days that remembers the order in which the days were
/// inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<WeekDay>", into = "Vec<WeekDay>")]
pub struct DaySet {
    order: Vec<WeekDay>,
    contains: [bool; 7],
}

impl DaySet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            order: Vec::new(),
            contains: [false; 7],
        }
    }

    /// Inserts the day, returns `false` if it was already present.
    pub fn insert(&mut self, day: WeekDay) -> bool {
        let slot = &mut self.contains[day.as_usize() - 1];
        if *slot {
            return false;
        }

        *slot = true;
        self.order.push(day);
        true
    }

    #[must_use]
    pub fn contains(&self, day: WeekDay) -> bool {
        self.contains[day.as_usize() - 1]
    }

    /// Iterates over the days in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = WeekDay> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.iter().any(|day| other.contains(day))
    }
}

impl FromIterator<WeekDay> for DaySet {
    fn from_iter<I: IntoIterator<Item = WeekDay>>(iter: I) -> Self {
        let mut result = Self::new();
        for day in iter {
            result.insert(day);
        }
        result
    }
}

impl From<Vec<WeekDay>> for DaySet {
    fn from(days: Vec<WeekDay>) -> Self {
        days.into_iter().collect()
    }
}

impl From<DaySet> for Vec<WeekDay> {
    fn from(set: DaySet) -> Self {
        set.order
    }
}

impl<const N: usize> From<[WeekDay; N]> for DaySet {
    fn from(days: [WeekDay; N]) -> Self {
        days.into_iter().collect()
    }
}

impl FromStr for DaySet {
    type Err = InvalidDay;

    /// Parses a comma separated list of days, blank items are skipped.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        string
            .split(',')
            .filter(|item| !item.trim().is_empty())
            .map(WeekDay::from_str)
            .collect()
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", day)?;
        }

        Ok(())
    }
}
