use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("expected a time in the 24-hour format HH:MM, found \"{input}\"")]
pub struct InvalidTimeFormat {
    input: String,
}

impl InvalidTimeFormat {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl TimeStamp {
    pub const fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    #[must_use]
    pub(crate) const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// The time that passed since midnight.
    #[must_use]
    pub const fn since_midnight(&self) -> Duration {
        Duration::from_secs(self.as_minutes() as u64 * 60)
    }

    /// Returns how much time passes from `self` until `later`, or `None` if
    /// `later` is not after `self`.
    #[must_use]
    pub fn until(&self, later: &Self) -> Option<Duration> {
        (later > self).then(|| later.since_midnight() - self.since_midnight())
    }
}

fn parse_component(string: &str) -> Option<u8> {
    if string.is_empty() || string.len() > 2 || !string.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    string.parse().ok()
}

impl FromStr for TimeStamp {
    type Err = InvalidTimeFormat;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let trimmed = string.trim();

        let (hour, minute) = trimmed
            .split_once(':')
            .ok_or_else(|| InvalidTimeFormat::new(string))?;

        // the minute is always written with two digits, the hour may omit the leading zero
        if minute.len() != 2 {
            return Err(InvalidTimeFormat::new(string));
        }

        match (parse_component(hour), parse_component(minute)) {
            (Some(hour), Some(minute)) => {
                Self::new(hour, minute).map_err(|_| InvalidTimeFormat::new(string))
            }
            _ => Err(InvalidTimeFormat::new(string)),
        }
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
