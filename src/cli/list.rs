//! `tt list` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use crate::task::{Task, TaskStatus, TaskStore};

const TABLE_COL_ID: usize = 4;
const TABLE_COL_STATUS: usize = 11;
const TABLE_COL_DESCRIPTION: usize = 40;
const TABLE_COL_TIMESTAMP: usize = 16;

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (todo, in-progress, done)
    pub status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_status$} {:<width_desc$} {:<width_ts$} {:<width_ts$}",
        "ID",
        "STATUS",
        "DESCRIPTION",
        "CREATED",
        "UPDATED",
        width_id = TABLE_COL_ID,
        width_status = TABLE_COL_STATUS,
        width_desc = TABLE_COL_DESCRIPTION,
        width_ts = TABLE_COL_TIMESTAMP
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_STATUS + TABLE_COL_DESCRIPTION + 2 * TABLE_COL_TIMESTAMP + 4)
    );
}

fn print_table_row(task: &Task) {
    let description = super::truncate(&task.description, TABLE_COL_DESCRIPTION);
    println!(
        "{:<width_id$} {:<width_status$} {:<width_desc$} {:<width_ts$} {:<width_ts$}",
        task.id,
        task.status.label(),
        description,
        task.created_at.format("%Y-%m-%d %H:%M").to_string(),
        task.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        width_id = TABLE_COL_ID,
        width_status = TABLE_COL_STATUS,
        width_desc = TABLE_COL_DESCRIPTION,
        width_ts = TABLE_COL_TIMESTAMP
    );
}

pub fn run(file: &Path, args: ListArgs) -> Result<()> {
    let filter = match &args.status {
        Some(raw) => match TaskStatus::parse(raw) {
            Some(status) => Some(status),
            None => bail!("Invalid status '{}' (expected todo, in-progress or done)", raw),
        },
        None => None,
    };

    let store = TaskStore::new(file);
    let tasks = store.list(filter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    print_table_header();
    for task in &tasks {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", tasks.len());

    Ok(())
}
