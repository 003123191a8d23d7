//! Enumerations and field types for tasks.
//!
//! This module defines the closed set of priority codes, the temporal status
//! categories derived from due dates, and the colored markers used to display
//! both in the task table.

use std::fmt;

use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TasklistError};

/// Priority of a task, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    #[serde(rename = "C")]
    Critical,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    /// All priorities in urgency order.
    pub const ALL: [Priority; 4] = [Priority::Critical, Priority::High, Priority::Normal, Priority::Low];

    /// The single-letter code used in prompts and in the task file.
    pub fn code(self) -> &'static str {
        match self {
            Priority::Critical => "C",
            Priority::High => "H",
            Priority::Normal => "N",
            Priority::Low => "L",
        }
    }

    /// Decode a priority code. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_code(code: &str) -> Result<Priority> {
        let trimmed = code.trim();
        Priority::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TasklistError::UnknownPriority(code.to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a task's due date relates to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueStatus {
    Upcoming,
    DueToday,
    Overdue,
}

/// Background color of the one-cell marker drawn in the P and D columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Marker {
    /// Index in the 256-color palette. The bright half of the basic palette
    /// (9-12) is the same set of colors as SGR backgrounds 101-104.
    pub fn palette_index(self) -> u8 {
        match self {
            Marker::Red => 9,
            Marker::Yellow => 11,
            Marker::Green => 10,
            Marker::Blue => 12,
        }
    }

    /// A single blank with the marker's background color applied.
    ///
    /// The returned string is one column wide on screen but longer in bytes,
    /// since it carries the escape sequences.
    pub fn paint(self) -> String {
        " ".on(Color::AnsiValue(self.palette_index())).to_string()
    }
}
