use course_schedule::catalog::{CandidateSlot, Catalog, CourseCatalogEntry};
use course_schedule::input::Session;
use course_schedule::preferences::Preferences;
use course_schedule::time::{DaySet, TimeInterval};

/// Makes a slot from the way it would be written in a catalog file.
#[must_use]
pub fn slot(start: &str, hours: f64, days: &str) -> CandidateSlot {
    CandidateSlot::new(
        days.parse::<DaySet>().expect("days should be valid"),
        TimeInterval::from_hours(start.parse().expect("start should be valid"), hours)
            .expect("interval should be valid"),
    )
    .expect("a slot needs at least one day")
}

#[must_use]
pub fn catalog(entries: Vec<(&str, Vec<CandidateSlot>)>) -> Catalog {
    Catalog::new(
        entries
            .into_iter()
            .map(|(code, slots)| CourseCatalogEntry::new(code, slots).expect("entry should be valid"))
            .collect(),
    )
    .expect("catalog should be valid")
}

/// The example course CS115 from the built-in catalog.
#[must_use]
#[allow(dead_code)]
pub fn cs115() -> Catalog {
    catalog(vec![(
        "CS115",
        vec![
            slot("10:00", 2.0, "Monday, Wednesday"),
            slot("14:00", 2.0, "Tuesday, Thursday"),
        ],
    )])
}

#[must_use]
pub fn session(catalog: Catalog, days_off: &str, hours_off: Option<(&str, &str)>) -> Session {
    let (start, end) = hours_off.unwrap_or(("", ""));
    let preferences =
        Preferences::parse(days_off, start, end).expect("preferences should be valid");

    Session::new(preferences, catalog)
}
