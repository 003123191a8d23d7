//! Fixed-width task table.
//!
//! The table has six bordered columns. Every cell is centered except the task
//! column, which is left-aligned and wraps long lines across as many physical
//! rows as needed. All widths are counted in characters.
//!
//! ```text
//! +----+------------+-------+---+---+--------------------------------------------+
//! | N  |    Date    | Time  | P | D |                   Task                     |
//! +----+------------+-------+---+---+--------------------------------------------+
//! | 1  | 2026-10-19 | 14:30 |   |   |Simple task                                 |
//! +----+------------+-------+---+---+--------------------------------------------+
//! ```

use chrono::{NaiveDate, NaiveDateTime};

use crate::classify::{classify_priority, classify_status, status_marker};
use crate::fields::{DueStatus, Marker, Priority};
use crate::task::Task;

pub const NUMBER_COL_WIDTH: usize = 4;
pub const DATE_COL_WIDTH: usize = 12;
pub const TIME_COL_WIDTH: usize = 7;
pub const PRIORITY_COL_WIDTH: usize = 3;
pub const STATUS_COL_WIDTH: usize = 3;
pub const TASK_COL_WIDTH: usize = 44;

/// Printed instead of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "No tasks have been input";

// Kept at 19/21 rather than centered: existing output depends on it.
const TASK_HEADER: &str = "                   Task                     ";

/// Everything the renderer needs to draw one task.
#[derive(Debug, Clone)]
pub struct TaskRow<'a> {
    pub number: usize,
    pub date_time: NaiveDateTime,
    pub priority: Priority,
    pub status: DueStatus,
    pub lines: &'a [String],
}

impl<'a> TaskRow<'a> {
    /// View of a stored task, with its status judged against `today`.
    pub fn from_task(task: &'a Task, today: NaiveDate) -> Self {
        TaskRow {
            number: task.number,
            date_time: task.date_time,
            priority: task.priority,
            status: classify_status(task.date(), today),
            lines: &task.sub_tasks,
        }
    }
}

/// Render rows as a bordered table, or `EMPTY_MESSAGE` when there are none.
pub fn render_table(rows: &[TaskRow<'_>]) -> String {
    if rows.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let sep = separator();
    let mut out = vec![sep.clone(), header(), sep.clone()];
    for row in rows {
        out.extend(task_rows(row));
        out.push(sep.clone());
    }
    out.join("\n")
}

/// `+----+------------+...+` matching every column width.
pub fn separator() -> String {
    let mut line = String::from("+");
    for width in [
        NUMBER_COL_WIDTH,
        DATE_COL_WIDTH,
        TIME_COL_WIDTH,
        PRIORITY_COL_WIDTH,
        STATUS_COL_WIDTH,
        TASK_COL_WIDTH,
    ] {
        line.push_str(&"-".repeat(width));
        line.push('+');
    }
    line
}

pub fn header() -> String {
    assemble(
        &padded_cell("N", NUMBER_COL_WIDTH),
        &padded_cell("Date", DATE_COL_WIDTH),
        &padded_cell("Time", TIME_COL_WIDTH),
        &padded_cell("P", PRIORITY_COL_WIDTH),
        &padded_cell("D", STATUS_COL_WIDTH),
        TASK_HEADER,
    )
}

/// All physical rows of one task, without the trailing separator.
///
/// The first row carries the number, date, time and markers; continuation
/// rows leave those columns blank.
pub fn task_rows(row: &TaskRow<'_>) -> Vec<String> {
    let mut chunks = wrap_lines(row.lines, TASK_COL_WIDTH);
    if chunks.is_empty() {
        chunks.push(String::new());
    }

    let number = padded_cell(&row.number.to_string(), NUMBER_COL_WIDTH);
    let date = padded_cell(&row.date_time.format("%Y-%m-%d").to_string(), DATE_COL_WIDTH);
    let time = padded_cell(&row.date_time.format("%H:%M").to_string(), TIME_COL_WIDTH);
    let priority = marker_cell(classify_priority(row.priority), PRIORITY_COL_WIDTH);
    let status = marker_cell(status_marker(row.status), STATUS_COL_WIDTH);

    let mut out = Vec::with_capacity(chunks.len());
    let mut chunks = chunks.iter();
    if let Some(first) = chunks.next() {
        out.push(assemble(&number, &date, &time, &priority, &status, &task_cell(first)));
    }
    for chunk in chunks {
        out.push(assemble(
            &blank(NUMBER_COL_WIDTH),
            &blank(DATE_COL_WIDTH),
            &blank(TIME_COL_WIDTH),
            &blank(PRIORITY_COL_WIDTH),
            &blank(STATUS_COL_WIDTH),
            &task_cell(chunk),
        ));
    }
    out
}

fn assemble(number: &str, date: &str, time: &str, priority: &str, status: &str, task: &str) -> String {
    format!("|{number}|{date}|{time}|{priority}|{status}|{task}|")
}

/// Center `text` in `width` columns, putting the odd blank on the right.
pub fn padded_cell(text: &str, width: usize) -> String {
    let diff = width.saturating_sub(text.chars().count());
    let left = diff / 2;
    let right = diff - left;
    format!("{}{}{}", blank(left), text, blank(right))
}

/// Center a one-column marker, ignoring the length of its escape sequences.
pub fn marker_cell(marker: Marker, width: usize) -> String {
    let pad = width / 2;
    format!("{}{}{}", blank(pad), marker.paint(), blank(pad))
}

/// Left-align a task chunk and pad it to the task column width.
pub fn task_cell(chunk: &str) -> String {
    let pad = TASK_COL_WIDTH.saturating_sub(chunk.chars().count());
    format!("{}{}", chunk, blank(pad))
}

/// Cut every non-empty line into chunks of at most `width` characters, in order.
pub fn wrap_lines<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| line.as_ref().split('\n'))
        .filter(|line| !line.is_empty())
        .flat_map(|line| chunk_line(line, width))
        .collect()
}

/// Slice `line` into consecutive `width`-character pieces; the last piece
/// holds the remainder and is omitted when the length divides evenly.
pub fn chunk_line(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars.chunks(width.max(1)).map(|c| c.iter().collect()).collect()
}

fn blank(width: usize) -> String {
    " ".repeat(width)
}
