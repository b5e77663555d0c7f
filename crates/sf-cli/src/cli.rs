//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Songflow - batch ETL for the song-play star schema
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override database path
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load song metadata and event logs into the star schema
    Run(RunArgs),

    /// Show row counts for the star-schema tables
    Stats,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the song-metadata directories from songflow.yml
    #[arg(long)]
    pub song_data: Option<String>,

    /// Override the event-log directories from songflow.yml
    #[arg(long)]
    pub log_data: Option<String>,

    /// Process only song metadata (skip event logs)
    #[arg(long, conflicts_with = "events_only")]
    pub songs_only: bool,

    /// Process only event logs (skip song metadata)
    #[arg(long)]
    pub events_only: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
