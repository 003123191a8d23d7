//! Task storage.
//!
//! This module provides the `Database` struct that owns the ordered task list,
//! keeps positional numbers dense, and reads/writes the JSON task file.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

use crate::error::{Result, TasklistError};
use crate::fields::Priority;
use crate::table::{render_table, TaskRow};
use crate::task::Task;

/// Default task file, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "tasklist.json";

/// In-memory list of tasks.
#[derive(Debug, Default)]
pub struct Database {
    tasks: Vec<Task>,
}

impl Database {
    /// Build a store from already-decoded tasks.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut db = Database { tasks };
        db.renumber();
        db
    }

    /// Load tasks from a JSON file. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no task file, starting empty");
            return Ok(Database::default());
        }
        let mut buf = String::new();
        File::open(path)?.read_to_string(&mut buf)?;
        let tasks: Vec<Task> = serde_json::from_str(&buf)?;
        if let Some(pos) = tasks.iter().position(|t| t.sub_tasks.is_empty()) {
            return Err(TasklistError::InvalidTaskFile(format!("task {} has no lines", pos + 1)));
        }
        info!(path = %path.display(), count = tasks.len(), "loaded tasks");
        Ok(Database::from_tasks(tasks))
    }

    /// Save tasks to a JSON file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(&self.tasks)?;
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        info!(path = %path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by its 1-based number.
    pub fn get(&self, number: usize) -> Result<&Task> {
        let count = self.tasks.len();
        number
            .checked_sub(1)
            .and_then(|i| self.tasks.get(i))
            .ok_or(TasklistError::TaskNotFound { number, count })
    }

    fn get_mut(&mut self, number: usize) -> Result<&mut Task> {
        let count = self.tasks.len();
        number
            .checked_sub(1)
            .and_then(|i| self.tasks.get_mut(i))
            .ok_or(TasklistError::TaskNotFound { number, count })
    }

    /// Append a task. Returns its number.
    pub fn add(&mut self, priority: Priority, date_time: NaiveDateTime, sub_tasks: Vec<String>) -> Result<usize> {
        if sub_tasks.is_empty() {
            return Err(TasklistError::BlankTask);
        }
        self.tasks.push(Task::new(priority, date_time, sub_tasks));
        self.renumber();
        let number = self.tasks.len();
        debug!(number, %priority, "added task");
        Ok(number)
    }

    /// Remove a task; every later task moves up by one.
    pub fn delete(&mut self, number: usize) -> Result<Task> {
        self.get(number)?;
        let removed = self.tasks.remove(number - 1);
        self.renumber();
        debug!(number, remaining = self.tasks.len(), "deleted task");
        Ok(removed)
    }

    pub fn set_priority(&mut self, number: usize, priority: Priority) -> Result<()> {
        self.get_mut(number)?.priority = priority;
        debug!(number, %priority, "changed priority");
        Ok(())
    }

    pub fn set_date(&mut self, number: usize, date: NaiveDate) -> Result<()> {
        self.get_mut(number)?.set_date(date);
        debug!(number, %date, "changed date");
        Ok(())
    }

    pub fn set_time(&mut self, number: usize, time: NaiveTime) -> Result<()> {
        self.get_mut(number)?.set_time(time);
        debug!(number, %time, "changed time");
        Ok(())
    }

    /// Replace the whole list of lines of a task.
    pub fn set_sub_tasks(&mut self, number: usize, sub_tasks: Vec<String>) -> Result<()> {
        if sub_tasks.is_empty() {
            return Err(TasklistError::BlankTask);
        }
        self.get_mut(number)?.sub_tasks = sub_tasks;
        debug!(number, "changed lines");
        Ok(())
    }

    /// Render every task as a table, judging due status against `today`.
    pub fn table(&self, today: NaiveDate) -> String {
        let rows: Vec<TaskRow<'_>> = self.tasks.iter().map(|t| TaskRow::from_task(t, today)).collect();
        render_table(&rows)
    }

    fn renumber(&mut self) {
        for (i, t) in self.tasks.iter_mut().enumerate() {
            t.number = i + 1;
        }
    }
}
