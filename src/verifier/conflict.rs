use core::fmt;

use crate::time::{TimeInterval, WeekDay};

/// Why a course could not be part of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    DayOff { day: WeekDay },
    HoursOff { hours_off: TimeInterval },
    NoViableSlot,
}

impl ConflictReason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DayOff { .. } => "day-off conflict",
            Self::HoursOff { .. } => "hours-off conflict",
            Self::NoViableSlot => "no viable slot",
        }
    }
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course that violates the preferences.
///
/// This is an expected result of validating a schedule and not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    code: String,
    reason: ConflictReason,
}

impl Conflict {
    #[must_use]
    pub fn new(code: impl Into<String>, reason: ConflictReason) -> Self {
        Self {
            code: code.into(),
            reason,
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn reason(&self) -> &ConflictReason {
        &self.reason
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ConflictReason::DayOff { day } => write!(
                f,
                "{} cannot be scheduled on {} because it's a day off",
                self.code, day
            ),
            ConflictReason::HoursOff { hours_off } => write!(
                f,
                "{} conflicts with the preferred hours off ({})",
                self.code, hours_off
            ),
            ConflictReason::NoViableSlot => {
                write!(f, "none of the slots of {} fit into the schedule", self.code)
            }
        }
    }
}

/// The result of validating a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Conflict(Conflict),
}

impl Validation {
    #[must_use]
    pub fn conflict(&self) -> Option<&Conflict> {
        match self {
            Self::Valid => None,
            Self::Conflict(conflict) => Some(conflict),
        }
    }
}

/// Whether validation stops at the first conflict or reports all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    #[default]
    FailFast,
    Exhaustive,
}
