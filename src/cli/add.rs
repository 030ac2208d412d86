//! `tt add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    pub description: String,
}

pub fn run(file: &Path, args: AddArgs) -> Result<()> {
    let store = TaskStore::new(file);
    let id = store.add(&args.description)?;
    println!("Task added successfully (ID: {})", id);
    Ok(())
}
