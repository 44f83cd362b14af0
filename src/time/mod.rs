use std::fmt;
use std::time::Duration;

/// Formats a fractional amount of hours the way a person would write it,
/// `2` instead of `2.0` and `1.5` for an hour and a half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrettyHours(f64);

impl fmt::Display for PrettyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already omits a trailing `.0`
        write!(f, "{}", self.0)
    }
}

impl From<f64> for PrettyHours {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Duration> for PrettyHours {
    fn from(value: Duration) -> Self {
        Self(value.as_secs_f64() / 3600.0)
    }
}

pub trait DurationExt {
    #[must_use]
    fn from_hours(hours: u64) -> Duration {
        Self::from_mins(hours * 60)
    }

    #[must_use]
    fn from_mins(mins: u64) -> Duration;
}

impl DurationExt for Duration {
    fn from_mins(mins: u64) -> Duration {
        Duration::from_secs(mins * 60)
    }
}

mod day_set;
pub use day_set::*;
mod week_day;
pub use week_day::*;
mod time_stamp;
pub use time_stamp::*;
mod time_interval;
pub use time_interval::*;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_pretty_hours() {
        assert_eq!(PrettyHours::from(Duration::from_hours(2)).to_string(), "2");
        assert_eq!(PrettyHours::from(Duration::from_mins(90)).to_string(), "1.5");
        assert_eq!(PrettyHours::from(Duration::from_mins(15)).to_string(), "0.25");
    }
}
