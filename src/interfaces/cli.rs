use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlchat")]
#[command(about = "Ask the student database questions in natural language.")]
#[command(version)]
pub struct Cli {
    /// Print the generated SQL under each answer
    #[arg(short = 's', long)]
    pub show_sql: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Answer language (ar, en)
    #[arg(short = 'l', long)]
    pub locale: Option<String>,

    /// SQLite database to query
    #[arg(short = 'd', long)]
    pub database: Option<PathBuf>,

    /// Create the sample student database
    #[arg(long)]
    pub init_db: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Question text; starts an interactive chat when omitted
    #[arg(num_args = 1..)]
    pub question: Vec<String>,
}
