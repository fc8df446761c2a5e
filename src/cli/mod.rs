//! CLI command handler

pub mod commands;

pub use commands::{run, ExportOutcome, RunOptions};
