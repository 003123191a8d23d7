use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::db::DEFAULT_FILE_NAME;

/// Terminal to-do list.
/// Tasks are kept in ./tasklist.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "tasklist", version, about = "Terminal to-do list with priorities and due dates")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, env = "TASKLIST_DB", default_value = DEFAULT_FILE_NAME)]
    pub db: PathBuf,

    /// Log filter, e.g. "warn" or "tasklist=debug". Logs go to stderr.
    #[arg(long, global = true, env = "TASKLIST_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default).
    Shell,

    /// Print the task table and exit.
    Print,

    /// Generate shell completion scripts.
    Completions {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
