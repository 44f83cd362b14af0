use crate::schedule::AssignedCourse;
use crate::time::DaySet;
use crate::verifier::{Conflict, ConflictReason, Verifier};

/// Rejects courses that take place on one of the days off.
pub struct VerifyDaysOff<'a> {
    days_off: &'a DaySet,
}

impl<'a> VerifyDaysOff<'a> {
    pub fn new(days_off: &'a DaySet) -> Self {
        Self { days_off }
    }
}

impl Verifier for VerifyDaysOff<'_> {
    type Error = Conflict;

    fn verify(&self, course: &AssignedCourse) -> Result<(), Self::Error> {
        // the first offending day in the order the course lists them is reported
        if let Some(day) = course.days().iter().find(|day| self.days_off.contains(*day)) {
            return Err(Conflict::new(course.code(), ConflictReason::DayOff { day }));
        }

        Ok(())
    }
}
