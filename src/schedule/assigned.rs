use core::fmt;

use serde::Serialize;

use crate::catalog::CandidateSlot;
use crate::time::{DaySet, PrettyHours, TimeInterval, TimeStamp};

/// A course together with the slot it will take place in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedCourse {
    code: String,
    slot: CandidateSlot,
}

impl AssignedCourse {
    #[must_use]
    pub fn new(code: impl Into<String>, slot: CandidateSlot) -> Self {
        Self {
            code: code.into(),
            slot,
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn slot(&self) -> &CandidateSlot {
        &self.slot
    }

    #[must_use]
    pub fn days(&self) -> &DaySet {
        self.slot.days()
    }

    #[must_use]
    pub fn interval(&self) -> &TimeInterval {
        self.slot.interval()
    }

    #[must_use]
    pub fn start(&self) -> TimeStamp {
        self.slot.interval().start()
    }
}

impl fmt::Display for AssignedCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} for {} hours, Days: {}",
            self.code,
            self.start(),
            PrettyHours::from(self.interval().duration()),
            self.days()
        )
    }
}

#[derive(Serialize)]
struct AssignedCourseRecord<'a> {
    code: &'a str,
    start: TimeStamp,
    end: String,
    duration_hours: f64,
    days: &'a DaySet,
}

impl Serialize for AssignedCourse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let interval = self.interval();
        let end = interval.end_offset().as_secs() / 60;

        AssignedCourseRecord {
            code: &self.code,
            start: interval.start(),
            end: format!("{:02}:{:02}", end / 60, end % 60),
            duration_hours: interval.hours(),
            days: self.days(),
        }
        .serialize(serializer)
    }
}
