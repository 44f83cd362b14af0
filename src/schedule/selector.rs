use log::{debug, trace};

use crate::catalog::Catalog;
use crate::schedule::AssignedCourse;
use crate::verifier::{Conflict, ConflictReason, ScheduleValidator};

/// Picks exactly one slot per course.
///
/// The courses are visited in catalog order and for each of them the first
/// slot is taken that satisfies the preferences and does not clash with a
/// slot that was already picked. Decisions are never revisited, so a course
/// can end up without a slot even though a different choice for an earlier
/// course would have left room for it.
pub struct SlotSelector<'a> {
    validator: &'a ScheduleValidator<'a>,
}

impl<'a> SlotSelector<'a> {
    pub fn new(validator: &'a ScheduleValidator<'a>) -> Self {
        Self { validator }
    }

    pub fn select(&self, catalog: &Catalog) -> Result<Vec<AssignedCourse>, Conflict> {
        let mut schedule: Vec<AssignedCourse> = Vec::with_capacity(catalog.len());

        for entry in catalog.iter() {
            let picked = entry
                .slots()
                .iter()
                .map(|slot| AssignedCourse::new(entry.code(), slot.clone()))
                .find(|candidate| {
                    if let Err(conflict) = self.validator.check(candidate) {
                        trace!("skipping slot: {}", conflict);
                        return false;
                    }

                    if let Some(other) = schedule
                        .iter()
                        .find(|other| other.slot().clashes_with(candidate.slot()))
                    {
                        trace!("skipping slot of {}, it clashes with {}", candidate, other);
                        return false;
                    }

                    true
                });

            let Some(course) = picked else {
                return Err(Conflict::new(entry.code(), ConflictReason::NoViableSlot));
            };

            debug!("selected {}", course);
            schedule.push(course);
        }

        Ok(schedule)
    }
}
