use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(name = "kanbanpro")]
#[command(about = "Single-user kanban board server - boards, columns, tasks, flat-file JSON storage")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (-q)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json: bool,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Path to the JSON data file
    #[arg(long, default_value = "data.json")]
    pub data: PathBuf,
}
