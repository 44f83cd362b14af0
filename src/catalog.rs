use std::collections::HashSet;

use thiserror::Error;

use crate::time::{DaySet, TimeInterval};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCourse {
    #[error("a course code must not be empty")]
    EmptyCode,
    #[error("course `{code}` does not offer any slots")]
    NoSlots { code: String },
    #[error("a slot of course `{code}` is not on any day")]
    NoDays { code: String },
    #[error("course `{code}` is listed more than once")]
    DuplicateCode { code: String },
}

/// One offering of a course: the days it takes place on and at which time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSlot {
    days: DaySet,
    interval: TimeInterval,
}

impl CandidateSlot {
    /// Creates a slot, the `days` must not be empty.
    ///
    /// Returns `None` for an empty set of days, the caller knows which
    /// course the slot belongs to and reports the error.
    #[must_use]
    pub fn new(days: DaySet, interval: TimeInterval) -> Option<Self> {
        if days.is_empty() {
            return None;
        }

        Some(Self { days, interval })
    }

    #[must_use]
    pub fn days(&self) -> &DaySet {
        &self.days
    }

    #[must_use]
    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    /// Two slots clash if they share a day and their times overlap.
    #[must_use]
    pub fn clashes_with(&self, other: &Self) -> bool {
        self.days.intersects(&other.days) && self.interval.overlaps(&other.interval)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCatalogEntry {
    code: String,
    slots: Vec<CandidateSlot>,
}

impl CourseCatalogEntry {
    pub fn new(code: impl Into<String>, slots: Vec<CandidateSlot>) -> Result<Self, InvalidCourse> {
        let code = code.into();

        if code.trim().is_empty() {
            return Err(InvalidCourse::EmptyCode);
        }

        if slots.is_empty() {
            return Err(InvalidCourse::NoSlots { code });
        }

        Ok(Self { code, slots })
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The offered slots in the order they were listed.
    #[must_use]
    pub fn slots(&self) -> &[CandidateSlot] {
        &self.slots
    }
}

/// All courses that can be taken, in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CourseCatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CourseCatalogEntry>) -> Result<Self, InvalidCourse> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if !seen.insert(entry.code()) {
                return Err(InvalidCourse::DuplicateCode {
                    code: entry.code().to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseCatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of slots offered by all courses combined.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.slots().len()).sum()
    }
}
