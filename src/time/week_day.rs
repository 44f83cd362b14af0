use core::fmt;
use core::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub fn as_usize(&self) -> usize {
        *self as usize
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\"{input}\" is not a day of the week")]
pub struct InvalidDay {
    input: String,
}

impl InvalidDay {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for WeekDay {
    type Err = InvalidDay;

    /// Accepts the english name of the day or its three letter abbreviation,
    /// ignoring case and surrounding whitespace.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let needle = string.trim();

        Self::week_days()
            .into_iter()
            .find(|day| {
                let name = day.name();
                name.eq_ignore_ascii_case(needle) || name[..3].eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| InvalidDay {
                input: string.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for WeekDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_str() {
        assert_eq!("Monday".parse(), Ok(WeekDay::Monday));
        assert_eq!("wednesday".parse(), Ok(WeekDay::Wednesday));
        assert_eq!(" Thu ".parse(), Ok(WeekDay::Thursday));
        assert_eq!("SUN".parse(), Ok(WeekDay::Sunday));
    }

    #[test]
    fn test_from_str_unknown() {
        for input in ["", "Mo", "Mondays", "Funday", "Montag"] {
            assert_eq!(
                input.parse::<WeekDay>(),
                Err(InvalidDay {
                    input: input.to_string()
                })
            );
        }
    }
}
