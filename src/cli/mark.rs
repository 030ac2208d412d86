//! `tt mark-in-progress` and `tt mark-done` command implementations

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{TaskError, TaskStatus, TaskStore};

#[derive(Args)]
pub struct MarkArgs {
    /// Task ID
    pub id: u32,
}

pub fn run(file: &Path, args: MarkArgs, status: TaskStatus) -> Result<()> {
    let store = TaskStore::new(file);
    match store.set_status(args.id, status) {
        Ok(()) => println!("Task with ID {} marked as {}", args.id, status),
        Err(TaskError::NotFound(id)) => println!("Task with ID {} not found", id),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
