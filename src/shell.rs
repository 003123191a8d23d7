//! Line-oriented interactive shell.
//!
//! The shell reads actions and field values one line at a time, re-asks until
//! each value is valid, and applies the result to a `Database`. It works on any
//! `BufRead`/`Write` pair so whole sessions can be scripted in tests.

use std::io::{BufRead, Write};

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::classify::today_utc;
use crate::db::Database;
use crate::error::{Result, TasklistError};
use crate::fields::Priority;

/// Field names accepted by the edit action.
const EDITABLE_FIELDS: [&str; 4] = ["priority", "date", "time", "task"];

pub struct Shell<R, W> {
    db: Database,
    input: R,
    output: W,
    clock: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(db: Database, input: R, output: W) -> Self {
        Shell {
            db,
            input,
            output,
            clock: today_utc,
        }
    }

    /// Use a different source for "today" when classifying due dates.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Run until `end` or end of input, then hand the store back for saving.
    pub fn run(mut self) -> Result<Database> {
        match self.command_loop() {
            Ok(()) => Ok(self.db),
            Err(TasklistError::InputClosed) => {
                warn!("input closed, ending session");
                Ok(self.db)
            }
            Err(e) => Err(e),
        }
    }

    fn command_loop(&mut self) -> Result<()> {
        loop {
            self.say("Input an action (add, print, edit, delete, end):")?;
            let action = self.read_line()?.trim().to_lowercase();
            debug!(%action, "action");
            match action.as_str() {
                "end" => {
                    self.say("Tasklist exiting!")?;
                    return Ok(());
                }
                "add" => self.add()?,
                "print" => self.print_table()?,
                "edit" => self.edit()?,
                "delete" => self.delete()?,
                _ => self.say("The input action is invalid")?,
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        let priority = self.ask_priority()?;
        let date = self.ask_date()?;
        let time = self.ask_time()?;
        let Some(lines) = self.ask_sub_tasks()? else {
            return Ok(());
        };
        self.db.add(priority, date.and_time(time), lines)?;
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        if self.db.is_empty() {
            return self.say("No tasks have been input");
        }
        self.print_table()?;
        let number = self.ask_task_number()?;

        match self.ask_field()? {
            "priority" => {
                let priority = self.ask_priority()?;
                self.db.set_priority(number, priority)?;
            }
            "date" => {
                let date = self.ask_date()?;
                self.db.set_date(number, date)?;
            }
            "time" => {
                let time = self.ask_time()?;
                self.db.set_time(number, time)?;
            }
            _ => {
                let Some(lines) = self.ask_sub_tasks()? else {
                    return Ok(());
                };
                self.db.set_sub_tasks(number, lines)?;
            }
        }
        self.say("The task is changed")
    }

    fn delete(&mut self) -> Result<()> {
        if self.db.is_empty() {
            return self.say("No tasks have been input");
        }
        self.print_table()?;
        let number = self.ask_task_number()?;
        self.db.delete(number)?;
        self.say("The task is deleted")
    }

    fn print_table(&mut self) -> Result<()> {
        let table = self.db.table((self.clock)());
        self.say(&table)
    }

    fn ask_priority(&mut self) -> Result<Priority> {
        let codes: Vec<&str> = Priority::ALL.iter().map(|p| p.code()).collect();
        let prompt = format!("Input the task priority ({}):", codes.join(", "));
        loop {
            self.say(&prompt)?;
            if let Ok(priority) = Priority::from_code(&self.read_line()?) {
                return Ok(priority);
            }
        }
    }

    fn ask_date(&mut self) -> Result<NaiveDate> {
        loop {
            self.say("Input the date (yyyy-mm-dd):")?;
            match parse_date(&self.read_line()?) {
                Some(date) => return Ok(date),
                None => self.say("The input date is invalid")?,
            }
        }
    }

    fn ask_time(&mut self) -> Result<NaiveTime> {
        loop {
            self.say("Input the time (hh:mm):")?;
            match parse_time(&self.read_line()?) {
                Some(time) => return Ok(time),
                None => self.say("The input time is invalid")?,
            }
        }
    }

    /// Collect trimmed lines until a blank one. `None` when nothing was entered.
    fn ask_sub_tasks(&mut self) -> Result<Option<Vec<String>>> {
        self.say("Input a new task (enter a blank line to end):")?;
        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?.trim().to_string();
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        if lines.is_empty() {
            self.say("The task is blank")?;
            return Ok(None);
        }
        Ok(Some(lines))
    }

    fn ask_task_number(&mut self) -> Result<usize> {
        let count = self.db.len();
        loop {
            self.say(&format!("Input the task number (1-{count}):"))?;
            match self.read_line()?.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(n),
                _ => self.say("Invalid task number")?,
            }
        }
    }

    fn ask_field(&mut self) -> Result<&'static str> {
        loop {
            self.say("Input a field to edit (priority, date, time, task):")?;
            let field = self.read_line()?.trim().to_lowercase();
            match EDITABLE_FIELDS.iter().copied().find(|f| *f == field) {
                Some(f) => return Ok(f),
                None => self.say("Invalid field")?,
            }
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TasklistError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}

/// Parse `yyyy-mm-dd` where each part is a plain integer (`2026-1-5` is fine).
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return None;
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Parse `hh:mm` with a 24-hour clock.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let (hours, minutes) = input.trim().split_once(':')?;
    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}
