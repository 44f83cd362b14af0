use std::fs::File;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::catalog::{CandidateSlot, Catalog, CourseCatalogEntry, InvalidCourse};
use crate::time::{DaySet, TimeInterval, TimeStamp, WeekDay};
use crate::utils::{self, PathExt};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slot {
    #[serde(alias = "start_time")]
    start: String,
    /// In hours.
    duration: f64,
    days: Vec<String>,
}

impl Slot {
    pub fn new(start: impl Into<String>, duration: f64, days: Vec<String>) -> Self {
        Self {
            start: start.into(),
            duration,
            days,
        }
    }

    fn to_candidate(&self, code: &str) -> anyhow::Result<CandidateSlot> {
        let start: TimeStamp = self.start.parse()?;
        let interval = TimeInterval::from_hours(start, self.duration)?;
        let days = self
            .days
            .iter()
            .map(|day| day.parse::<WeekDay>())
            .collect::<Result<DaySet, _>>()?;

        CandidateSlot::new(days, interval).ok_or_else(|| {
            anyhow::Error::from(InvalidCourse::NoDays {
                code: code.to_string(),
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    code: String,
    #[serde(rename = "slot", alias = "slots", alias = "available_schedules", default)]
    slots: Vec<Slot>,
}

impl Course {
    pub fn new(code: impl Into<String>, slots: Vec<Slot>) -> Self {
        Self {
            code: code.into(),
            slots,
        }
    }

    fn to_entry(&self) -> anyhow::Result<CourseCatalogEntry> {
        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.to_candidate(&self.code)
                    .with_context(|| format!("invalid slot #{} of course `{}`", i + 1, self.code))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(CourseCatalogEntry::new(self.code.clone(), slots)?)
    }
}

/// A catalog file, in toml every course is a `[[course]]` table with
/// `[[course.slot]]` tables, in json the file is an array of courses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogFile {
    #[serde(rename = "course", default)]
    courses: Vec<Course>,
}

impl CatalogFile {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if path.has_extension("json") {
            let courses: Vec<Course> = serde_json::from_str(&utils::read_to_string(path)?)?;
            return Ok(Self::from(courses));
        }

        utils::toml_from_reader(File::open(path)?)
    }

    /// The catalog that is used when no other catalog is given.
    pub fn builtin() -> anyhow::Result<Self> {
        Ok(toml::from_str(&utils::resource_to_string("catalog.toml")?)?)
    }

    /// Checks every course and slot, the first invalid one fails the whole
    /// catalog.
    pub fn to_catalog(&self) -> anyhow::Result<Catalog> {
        let entries = self
            .courses
            .iter()
            .map(Course::to_entry)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Catalog::new(entries)?)
    }
}

impl From<Vec<Course>> for CatalogFile {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time::{InvalidDay, InvalidInterval, InvalidTimeFormat};

    fn days(days: &[&str]) -> Vec<String> {
        days.iter().map(|day| day.to_string()).collect()
    }

    fn convert(slot: Slot) -> anyhow::Result<Catalog> {
        CatalogFile::from(vec![Course::new("CS115", vec![slot])]).to_catalog()
    }

    #[test]
    fn test_parse_toml() {
        let file: CatalogFile = toml::from_str(concat!(
            "[[course]]\n",
            "code = \"CS115\"\n",
            "\n",
            "[[course.slot]]\n",
            "start = \"10:00\"\n",
            "duration = 2\n",
            "days = [\"Monday\", \"Wednesday\"]\n",
            "\n",
            "[[course.slot]]\n",
            "start = \"14:00\"\n",
            "duration = 1.5\n",
            "days = [\"Tuesday\"]\n",
        ))
        .expect("toml should be valid");

        assert_eq!(
            file,
            CatalogFile::from(vec![Course::new(
                "CS115",
                vec![
                    Slot::new("10:00", 2.0, days(&["Monday", "Wednesday"])),
                    Slot::new("14:00", 1.5, days(&["Tuesday"])),
                ]
            )])
        );
        assert_eq!(file.to_catalog().unwrap().slot_count(), 2);
    }

    #[test]
    fn test_parse_json_with_original_field_names() {
        let courses: Vec<Course> = serde_json::from_str(
            r#"[{"code": "ENGR112", "available_schedules": [
                {"start_time": "13:00", "duration": 1, "days": ["Tuesday", "Thursday"]}
            ]}]"#,
        )
        .expect("json should be valid");

        assert_eq!(
            courses,
            vec![Course::new(
                "ENGR112",
                vec![Slot::new("13:00", 1.0, days(&["Tuesday", "Thursday"]))]
            )]
        );
    }

    #[test]
    fn test_builtin() {
        let catalog = CatalogFile::builtin().unwrap().to_catalog().unwrap();

        assert_eq!(
            catalog.iter().map(|entry| entry.code()).collect::<Vec<_>>(),
            vec!["CS115", "ENGR112", "SSW345"]
        );
        assert_eq!(catalog.slot_count(), 6);
    }

    #[test]
    fn test_conversion_errors() {
        let error = convert(Slot::new("10:00", 2.0, days(&["Mon", "Caturday"]))).unwrap_err();
        assert_eq!(
            error.downcast_ref::<InvalidDay>().map(InvalidDay::input),
            Some("Caturday")
        );
        assert!(format!("{:#}", error).contains("slot #1 of course `CS115`"));

        let error = convert(Slot::new("10h", 2.0, days(&["Mon"]))).unwrap_err();
        assert!(error.downcast_ref::<InvalidTimeFormat>().is_some());

        let error = convert(Slot::new("10:00", 0.0, days(&["Mon"]))).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<InvalidInterval>(),
            Some(InvalidInterval::NonPositive { .. })
        ));

        let error = convert(Slot::new("23:00", 2.0, days(&["Mon"]))).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<InvalidInterval>(),
            Some(InvalidInterval::PastMidnight { .. })
        ));

        let error = convert(Slot::new("10:00", 1.0, vec![])).unwrap_err();
        assert_eq!(
            error.downcast_ref::<InvalidCourse>(),
            Some(&InvalidCourse::NoDays {
                code: "CS115".to_string()
            })
        );
    }

    #[test]
    fn test_course_without_slots() {
        let error = CatalogFile::from(vec![Course::new("CS115", vec![])])
            .to_catalog()
            .unwrap_err();

        assert_eq!(
            error.downcast_ref::<InvalidCourse>(),
            Some(&InvalidCourse::NoSlots {
                code: "CS115".to_string()
            })
        );
    }
}
