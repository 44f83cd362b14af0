use core::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::time::{PrettyHours, TimeStamp};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidInterval {
    #[error("the duration must be positive, found {hours} hours")]
    NonPositive { hours: f64 },
    #[error("starting at {start} for {duration} hours would end after midnight")]
    PastMidnight {
        start: TimeStamp,
        duration: PrettyHours,
    },
    #[error("the end {end} is not after the start {start}")]
    EndNotAfterStart { start: TimeStamp, end: TimeStamp },
}

/// A span of time on a single day, covering `[start, start + duration)`.
///
/// Two intervals where one ends exactly when the other starts do not
/// overlap. The end may be at most midnight of the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: TimeStamp,
    duration: Duration,
}

impl TimeInterval {
    pub fn new(start: TimeStamp, duration: Duration) -> Result<Self, InvalidInterval> {
        if duration.is_zero() {
            return Err(InvalidInterval::NonPositive { hours: 0.0 });
        }

        let end = start.since_midnight().checked_add(duration);
        if end.map_or(true, |end| end > DAY) {
            return Err(InvalidInterval::PastMidnight {
                start,
                duration: duration.into(),
            });
        }

        Ok(Self { start, duration })
    }

    /// Creates an interval from a fractional amount of hours, like `1.5`.
    pub fn from_hours(start: TimeStamp, hours: f64) -> Result<Self, InvalidInterval> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(InvalidInterval::NonPositive { hours });
        }

        // checked here, because `Duration::from_secs_f64` panics on overflow
        if hours > 24.0 {
            return Err(InvalidInterval::PastMidnight {
                start,
                duration: PrettyHours::from(hours),
            });
        }

        Self::new(start, Duration::from_secs_f64(hours * 3600.0))
    }

    /// Creates the interval from `start` up to (excluding) `end`.
    pub fn between(start: TimeStamp, end: TimeStamp) -> Result<Self, InvalidInterval> {
        let duration = start
            .until(&end)
            .ok_or(InvalidInterval::EndNotAfterStart { start, end })?;

        Self::new(start, duration)
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn hours(&self) -> f64 {
        self.duration.as_secs_f64() / 3600.0
    }

    #[must_use]
    pub fn start_offset(&self) -> Duration {
        self.start.since_midnight()
    }

    /// The end as time since midnight, this might be exactly 24 hours.
    #[must_use]
    pub fn end_offset(&self) -> Duration {
        self.start_offset() + self.duration
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_offset() < other.end_offset() && other.start_offset() < self.end_offset()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.end_offset().as_secs() / 60;
        write!(f, "{} to {:02}:{:02}", self.start, end / 60, end % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time::DurationExt;
    use crate::time_stamp;

    fn interval(start: TimeStamp, hours: f64) -> TimeInterval {
        TimeInterval::from_hours(start, hours).unwrap()
    }

    #[test]
    fn test_overlaps() {
        let morning = interval(time_stamp!(09:00), 3.0);

        // the same interval
        assert!(morning.overlaps(&morning));
        // 10:00 - 12:00 is contained
        assert!(morning.overlaps(&interval(time_stamp!(10:00), 2.0)));
        // 08:00 - 13:00 contains it
        assert!(morning.overlaps(&interval(time_stamp!(08:00), 5.0)));
        // 11:00 - 14:00 overlaps the end
        assert!(morning.overlaps(&interval(time_stamp!(11:00), 3.0)));
        // 13:00 - 14:00 is after it
        assert!(!morning.overlaps(&interval(time_stamp!(13:00), 1.0)));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let hours_off = interval(time_stamp!(09:00), 3.0);

        // 08:00 - 09:00 ends exactly when the hours off start
        let before = interval(time_stamp!(08:00), 1.0);
        assert!(!before.overlaps(&hours_off));
        assert!(!hours_off.overlaps(&before));

        // 12:00 - 13:00 starts exactly when the hours off end
        let after = interval(time_stamp!(12:00), 1.0);
        assert!(!after.overlaps(&hours_off));
        assert!(!hours_off.overlaps(&after));

        // 08:59 for an hour reaches one minute into it
        let one_minute_in = interval(time_stamp!(08:59), 1.0);
        assert!(one_minute_in.overlaps(&hours_off));
        assert!(hours_off.overlaps(&one_minute_in));
    }

    #[test]
    fn test_non_positive_duration() {
        for hours in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TimeInterval::from_hours(time_stamp!(10:00), hours),
                Err(InvalidInterval::NonPositive { .. })
            ));
        }

        assert_eq!(
            TimeInterval::new(time_stamp!(10:00), Duration::ZERO),
            Err(InvalidInterval::NonPositive { hours: 0.0 })
        );
    }

    #[test]
    fn test_past_midnight() {
        assert!(matches!(
            TimeInterval::from_hours(time_stamp!(23:00), 1.5),
            Err(InvalidInterval::PastMidnight { .. })
        ));
        assert!(matches!(
            TimeInterval::from_hours(time_stamp!(00:00), 1000.0),
            Err(InvalidInterval::PastMidnight { .. })
        ));
        assert!(matches!(
            TimeInterval::new(time_stamp!(10:00), Duration::MAX),
            Err(InvalidInterval::PastMidnight { .. })
        ));
        assert!(matches!(
            TimeInterval::new(time_stamp!(23:59), Duration::from_mins(2)),
            Err(InvalidInterval::PastMidnight { .. })
        ));

        // ending exactly at midnight is fine
        let late = interval(time_stamp!(22:00), 2.0);
        assert_eq!(late.end_offset(), Duration::from_hours(24));
        assert_eq!(late.to_string(), "22:00 to 24:00");
    }

    #[test]
    fn test_between() {
        let hours_off = TimeInterval::between(time_stamp!(09:00), time_stamp!(12:00)).unwrap();

        assert_eq!(hours_off.start(), time_stamp!(09:00));
        assert_eq!(hours_off.duration(), Duration::from_hours(3));
        assert_eq!(hours_off.to_string(), "09:00 to 12:00");

        assert_eq!(
            TimeInterval::between(time_stamp!(12:00), time_stamp!(09:00)),
            Err(InvalidInterval::EndNotAfterStart {
                start: time_stamp!(12:00),
                end: time_stamp!(09:00),
            })
        );
        assert!(TimeInterval::between(time_stamp!(12:00), time_stamp!(12:00)).is_err());
    }

    #[test]
    fn test_fractional_hours() {
        let slot = interval(time_stamp!(10:30), 1.5);

        assert_eq!(slot.duration(), Duration::from_mins(90));
        assert_eq!(slot.hours(), 1.5);
        assert_eq!(slot.to_string(), "10:30 to 12:00");
    }
}
