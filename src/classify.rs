//! Derivation of display categories from task fields.

use chrono::{NaiveDate, Utc};

use crate::fields::{DueStatus, Marker, Priority};

/// Today's calendar date in UTC.
///
/// Status is always judged against UTC so output doesn't depend on the host zone.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Compare a task's due date with `today` at whole-day granularity.
pub fn classify_status(task_date: NaiveDate, today: NaiveDate) -> DueStatus {
    let days = (task_date - today).num_days();
    if days > 0 {
        DueStatus::Upcoming
    } else if days < 0 {
        DueStatus::Overdue
    } else {
        DueStatus::DueToday
    }
}

/// Marker drawn in the priority column.
pub fn classify_priority(priority: Priority) -> Marker {
    match priority {
        Priority::Critical => Marker::Red,
        Priority::High => Marker::Yellow,
        Priority::Normal => Marker::Green,
        Priority::Low => Marker::Blue,
    }
}

/// Marker drawn in the status column.
pub fn status_marker(status: DueStatus) -> Marker {
    match status {
        DueStatus::Upcoming => Marker::Green,
        DueStatus::DueToday => Marker::Yellow,
        DueStatus::Overdue => Marker::Red,
    }
}
