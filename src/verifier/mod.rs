use log::trace;

use crate::preferences::Preferences;
use crate::schedule::AssignedCourse;

mod conflict;
mod verifier;
mod verify_days_off;
mod verify_hours_off;

pub use conflict::*;
pub use verifier::Verifier;
pub use verify_days_off::*;
pub use verify_hours_off::*;

/// Validates a schedule against the preferences of the user.
///
/// Every course is first checked against the days off and then against the
/// hours off.
pub struct ScheduleValidator<'a> {
    days_off: VerifyDaysOff<'a>,
    hours_off: VerifyHoursOff<'a>,
}

impl<'a> ScheduleValidator<'a> {
    pub fn new(preferences: &'a Preferences) -> Self {
        Self {
            days_off: VerifyDaysOff::new(preferences.days_off()),
            hours_off: VerifyHoursOff::new(preferences.hours_off()),
        }
    }

    /// Checks a single course, returning its first conflict.
    pub fn check(&self, course: &AssignedCourse) -> Result<(), Conflict> {
        trace!("validating {}", course);

        self.days_off.verify(course)?;
        self.hours_off.verify(course)
    }

    /// Stops at the first conflict, courses are checked in schedule order.
    #[must_use]
    pub fn validate(&self, schedule: &[AssignedCourse]) -> Validation {
        for course in schedule {
            if let Err(conflict) = self.check(course) {
                return Validation::Conflict(conflict);
            }
        }

        Validation::Valid
    }

    /// Reports every conflict of every course, in schedule order.
    #[must_use]
    pub fn validate_all(&self, schedule: &[AssignedCourse]) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for course in schedule {
            if let Err(conflict) = self.days_off.verify(course) {
                conflicts.push(conflict);
            }

            if let Err(conflict) = self.hours_off.verify(course) {
                conflicts.push(conflict);
            }
        }

        conflicts
    }

    pub fn validate_with(
        &self,
        schedule: &[AssignedCourse],
        mode: ReportMode,
    ) -> Result<(), Vec<Conflict>> {
        let conflicts = match mode {
            ReportMode::FailFast => self.validate(schedule).conflict().cloned().into_iter().collect(),
            ReportMode::Exhaustive => self.validate_all(schedule),
        };

        if !conflicts.is_empty() {
            return Err(conflicts);
        }

        Ok(())
    }
}
