//! Task data structure and its storage encoding.
//!
//! A `Task` holds a priority, a due date-time at minute precision, and one or
//! more free-text lines. Its positional number is derived by the store and is
//! never written to disk.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::fields::Priority;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub priority: Priority,
    #[serde(rename = "dateTimeString", with = "date_time_format")]
    pub date_time: NaiveDateTime,
    #[serde(rename = "subTasks")]
    pub sub_tasks: Vec<String>,
    /// 1-based position in the list, re-derived by the store.
    #[serde(skip)]
    pub number: usize,
}

impl Task {
    pub fn new(priority: Priority, date_time: NaiveDateTime, sub_tasks: Vec<String>) -> Self {
        Task {
            priority,
            date_time: truncate_to_minute(date_time),
            sub_tasks,
            number: 0,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date_time.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.date_time.time()
    }

    /// Replace the calendar date, keeping the time of day.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date_time = date.and_time(self.time());
    }

    /// Replace the time of day, keeping the calendar date.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.date_time = truncate_to_minute(self.date().and_time(time));
    }
}

/// Drop seconds and sub-second parts.
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Fixed textual format for date-times in the task file.
pub mod date_time_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::truncate_to_minute;
    use crate::error::TasklistError;

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn format(dt: &NaiveDateTime) -> String {
        dt.format(FORMAT).to_string()
    }

    /// Parse `YYYY-MM-DDTHH:MM`, also accepting a trailing seconds field
    /// which is discarded.
    pub fn parse(s: &str) -> Result<NaiveDateTime, TasklistError> {
        NaiveDateTime::parse_from_str(s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, FORMAT_WITH_SECONDS))
            .map(truncate_to_minute)
            .map_err(|_| TasklistError::InvalidDateTime(s.to_string()))
    }

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }
}
