//! Task Tracker library - Core functionality for the command-line task tracker

pub mod cli;
pub mod task;
