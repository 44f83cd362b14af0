use serde::Deserialize;

use crate::preferences::{InvalidPreferences, Preferences};
use crate::time::{DaySet, TimeInterval, TimeStamp, WeekDay};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HoursOff {
    start: String,
    end: String,
}

/// ```toml
/// days_off = ["Monday", "Friday"]
///
/// [hours_off]
/// start = "09:00"
/// end = "12:00"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferencesFile {
    #[serde(default)]
    days_off: Vec<String>,
    #[serde(default)]
    hours_off: Option<HoursOff>,
}

impl PreferencesFile {
    pub fn to_preferences(&self) -> Result<Preferences, InvalidPreferences> {
        let days_off = self
            .days_off
            .iter()
            .map(|day| day.parse::<WeekDay>())
            .collect::<Result<DaySet, _>>()?;

        let hours_off = match &self.hours_off {
            Some(HoursOff { start, end }) => {
                Some(TimeInterval::between(
                    start.parse::<TimeStamp>()?,
                    end.parse::<TimeStamp>()?,
                )?)
            }
            None => None,
        };

        Ok(Preferences::new(days_off, hours_off))
    }
}
