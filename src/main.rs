//! # Tasklist
//!
//! A terminal to-do list. Each task has a priority (C, H, N, L), a due date and
//! time, and one or more lines of text. Tasks are shown in a fixed-width table
//! whose P and D columns carry colored markers for priority and due status.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session
//! tasklist
//!
//! # Print the table for a specific file
//! tasklist print --db ~/todo.json
//! ```
//!
//! The interactive session understands `add`, `print`, `edit`, `delete` and
//! `end`. Changes are written to the task file when the session ends.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;

pub mod classify;
pub mod cli;
pub mod db;
pub mod error;
pub mod fields;
pub mod logging;
pub mod shell;
pub mod table;
pub mod task;

use classify::today_utc;
use cli::{Cli, Commands};
use db::Database;
use shell::Shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    debug!(db = %cli.db.display(), "starting");

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Completions { shell } => {
            let mut app = Cli::command();
            let app_name = app.get_name().to_string();
            generate(shell, &mut app, app_name, &mut io::stdout());
        }
        Commands::Print => {
            let db = Database::load(&cli.db).with_context(|| format!("failed to load {}", cli.db.display()))?;
            println!("{}", db.table(today_utc()));
        }
        Commands::Shell => {
            let db = Database::load(&cli.db).with_context(|| format!("failed to load {}", cli.db.display()))?;
            let stdin = io::stdin();
            let stdout = BufWriter::new(io::stdout());
            let db = Shell::new(db, stdin.lock(), stdout).run()?;
            db.save(&cli.db)
                .with_context(|| format!("failed to save {}", cli.db.display()))?;
        }
    }
    Ok(())
}
