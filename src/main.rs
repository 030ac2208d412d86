//! Task Tracker - Local command-line task tracker

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_tracker::cli::{self, Cli, Commands};
use task_tracker::task::{TaskStatus, DEFAULT_TASK_FILE};

fn main() -> Result<()> {
    if std::env::var("TASK_TRACKER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_tracker=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion never touches the task file.
    if let Commands::Completion { shell } = cli.command {
        generate(shell, &mut Cli::command(), "tt", &mut std::io::stdout());
        return Ok(());
    }

    let file = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_FILE));

    match cli.command {
        Commands::Add(args) => cli::add::run(&file, args),
        Commands::Update(args) => cli::update::run(&file, args),
        Commands::Delete(args) => cli::delete::run(&file, args),
        Commands::MarkInProgress(args) => cli::mark::run(&file, args, TaskStatus::InProgress),
        Commands::MarkDone(args) => cli::mark::run(&file, args, TaskStatus::Done),
        Commands::List(args) => cli::list::run(&file, args),
        Commands::Completion { .. } => unreachable!(),
    }
}
