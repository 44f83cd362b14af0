use log::trace;

use crate::schedule::AssignedCourse;
use crate::time::TimeInterval;
use crate::verifier::{Conflict, ConflictReason, Verifier};

/// Rejects courses whose time overlaps the hours off.
pub struct VerifyHoursOff<'a> {
    hours_off: Option<&'a TimeInterval>,
}

impl<'a> VerifyHoursOff<'a> {
    pub fn new(hours_off: Option<&'a TimeInterval>) -> Self {
        Self { hours_off }
    }
}

impl Verifier for VerifyHoursOff<'_> {
    type Error = Conflict;

    fn verify(&self, course: &AssignedCourse) -> Result<(), Self::Error> {
        let Some(hours_off) = self.hours_off else {
            return Ok(());
        };

        trace!(
            "checking {} ({}) against hours off {}",
            course.code(),
            course.interval(),
            hours_off
        );

        if course.interval().overlaps(hours_off) {
            return Err(Conflict::new(
                course.code(),
                ConflictReason::HoursOff {
                    hours_off: *hours_off,
                },
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::catalog::CandidateSlot;
    use crate::time::{TimeStamp, WeekDay};
    use crate::time_stamp;

    fn course(start: TimeStamp, hours: f64) -> AssignedCourse {
        AssignedCourse::new(
            "ENGR112",
            CandidateSlot::new(
                [WeekDay::Monday].into(),
                TimeInterval::from_hours(start, hours).unwrap(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_boundaries() {
        let hours_off = TimeInterval::between(time_stamp!(09:00), time_stamp!(12:00)).unwrap();
        let verifier = VerifyHoursOff::new(Some(&hours_off));

        // ends exactly when the hours off start
        assert_eq!(verifier.verify(&course(time_stamp!(08:00), 1.0)), Ok(()));
        // starts exactly when the hours off end
        assert_eq!(verifier.verify(&course(time_stamp!(12:00), 2.0)), Ok(()));
        // reaches one minute into the hours off
        assert_eq!(
            verifier.verify(&course(time_stamp!(08:59), 1.0)),
            Err(Conflict::new(
                "ENGR112",
                ConflictReason::HoursOff { hours_off }
            ))
        );
        assert!(verifier.verify(&course(time_stamp!(10:00), 2.0)).is_err());
        // covers the hours off entirely
        assert!(verifier.verify(&course(time_stamp!(07:00), 6.0)).is_err());
    }

    #[test]
    fn test_without_hours_off() {
        assert_eq!(
            VerifyHoursOff::new(None).verify(&course(time_stamp!(10:00), 2.0)),
            Ok(())
        );
    }
}
