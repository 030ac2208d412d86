//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::delete::DeleteArgs;
use super::list::ListArgs;
use super::mark::MarkArgs;
use super::update::UpdateArgs;

#[derive(Parser)]
#[command(name = "tt", version, about = "Local command-line task tracker")]
pub struct Cli {
    /// Task file to operate on (defaults to tasks.json in the current directory)
    #[arg(long, global = true, env = "TASK_TRACKER_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Update an existing task's description
    Update(UpdateArgs),

    /// Delete a task
    Delete(DeleteArgs),

    /// Mark a task as in-progress
    MarkInProgress(MarkArgs),

    /// Mark a task as done
    MarkDone(MarkArgs),

    /// List tasks, optionally filtered by status
    List(ListArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
