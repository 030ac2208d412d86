//! `tt delete` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{TaskError, TaskStore};

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: u32,
}

pub fn run(file: &Path, args: DeleteArgs) -> Result<()> {
    let store = TaskStore::new(file);
    match store.delete(args.id) {
        Ok(()) => println!("Task with ID {} deleted successfully", args.id),
        Err(TaskError::NotFound(id)) => println!("Task with ID {} not found", id),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
