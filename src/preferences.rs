use core::fmt;

use thiserror::Error;

use crate::time::{
    DaySet, InvalidDay, InvalidInterval, InvalidTimeFormat, TimeInterval, TimeStamp,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidPreferences {
    #[error(transparent)]
    Day(#[from] InvalidDay),
    #[error(transparent)]
    TimeFormat(#[from] InvalidTimeFormat),
    #[error("invalid hours off: {0}")]
    Interval(#[from] InvalidInterval),
}

/// The days and hours one does not want to have any classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    days_off: DaySet,
    hours_off: Option<TimeInterval>,
}

impl Preferences {
    #[must_use]
    pub fn new(days_off: DaySet, hours_off: Option<TimeInterval>) -> Self {
        Self {
            days_off,
            hours_off,
        }
    }

    /// Parses the preferences as they are entered by a user.
    ///
    /// `days_off` is a comma separated list of days, the hours off are two
    /// times in the format `HH:MM`. If both times are blank, there are no
    /// hours off.
    pub fn parse(
        days_off: &str,
        hours_off_start: &str,
        hours_off_end: &str,
    ) -> Result<Self, InvalidPreferences> {
        let days_off = days_off.parse::<DaySet>()?;

        let hours_off = if hours_off_start.trim().is_empty() && hours_off_end.trim().is_empty() {
            None
        } else {
            Some(TimeInterval::between(
                hours_off_start.parse::<TimeStamp>()?,
                hours_off_end.parse::<TimeStamp>()?,
            )?)
        };

        Ok(Self::new(days_off, hours_off))
    }

    #[must_use]
    pub fn days_off(&self) -> &DaySet {
        &self.days_off
    }

    #[must_use]
    pub fn hours_off(&self) -> Option<&TimeInterval> {
        self.hours_off.as_ref()
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days_off.is_empty() {
            write!(f, "Days off: none, ")?;
        } else {
            write!(f, "Days off: {}, ", self.days_off)?;
        }

        match &self.hours_off {
            Some(hours_off) => write!(f, "Hours off: {}", hours_off),
            None => write!(f, "Hours off: none"),
        }
    }
}
