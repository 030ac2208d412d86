//! `tt update` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{TaskError, TaskStore};

#[derive(Args)]
pub struct UpdateArgs {
    /// Task ID
    pub id: u32,

    /// New task description
    pub description: String,
}

pub fn run(file: &Path, args: UpdateArgs) -> Result<()> {
    let store = TaskStore::new(file);
    match store.update(args.id, &args.description) {
        Ok(()) => println!("Task updated successfully (ID: {})", args.id),
        Err(TaskError::NotFound(id)) => println!("Task with ID {} not found", id),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
