use log::debug;

use crate::catalog::Catalog;
use crate::schedule::AssignedCourse;

/// How the courses of a catalog are turned into a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssemblyMode {
    /// Every slot of every course becomes part of the schedule.
    #[default]
    AllSlots,
    /// For each course the first slot that fits is picked, see [`SlotSelector`](crate::schedule::SlotSelector).
    SelectSlot,
}

/// Puts every offered slot of every course into the schedule.
///
/// A course with two slots ends up twice in the schedule, both slots have to
/// pass validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleAssembler;

impl ScheduleAssembler {
    #[must_use]
    pub fn assemble(&self, catalog: &Catalog) -> Vec<AssignedCourse> {
        let mut schedule = Vec::with_capacity(catalog.slot_count());

        for entry in catalog.iter() {
            for slot in entry.slots() {
                let course = AssignedCourse::new(entry.code(), slot.clone());
                debug!("assembled {}", course);
                schedule.push(course);
            }
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::catalog::{CandidateSlot, CourseCatalogEntry};
    use crate::time::{TimeInterval, TimeStamp, WeekDay};
    use crate::time_stamp;

    fn entry(code: &str, starts: &[TimeStamp]) -> CourseCatalogEntry {
        CourseCatalogEntry::new(
            code,
            starts
                .iter()
                .map(|start| {
                    CandidateSlot::new(
                        [WeekDay::Monday].into(),
                        TimeInterval::from_hours(*start, 1.0).unwrap(),
                    )
                    .unwrap()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_emits_every_slot_in_order() {
        let catalog = Catalog::new(vec![
            entry("CS115", &[time_stamp!(10:00), time_stamp!(14:00)]),
            entry("ENGR112", &[time_stamp!(13:00)]),
            entry("SSW345", &[time_stamp!(15:00), time_stamp!(17:00), time_stamp!(08:00)]),
        ])
        .unwrap();

        let schedule = ScheduleAssembler.assemble(&catalog);

        assert_eq!(schedule.len(), catalog.slot_count());
        assert_eq!(
            schedule
                .iter()
                .map(|course| (course.code(), course.start().to_string()))
                .collect::<Vec<_>>(),
            vec![
                ("CS115", "10:00".to_string()),
                ("CS115", "14:00".to_string()),
                ("ENGR112", "13:00".to_string()),
                ("SSW345", "15:00".to_string()),
                ("SSW345", "17:00".to_string()),
                ("SSW345", "08:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(ScheduleAssembler.assemble(&Catalog::default()), vec![]);
    }
}
