use clap::Parser;

/// urgency — list tasks from a file, soonest due first
#[derive(Parser, Debug, Clone)]
#[command(name = "urgency", version, about)]
pub struct Cli {
    /// Task file to read (default: tasks.txt)
    #[arg(long)]
    pub file: Option<String>,

    /// Path to config file (default: urgency.toml if present)
    #[arg(long)]
    pub config: Option<String>,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<String>,

    /// Evaluate urgency as of this date (YYYY-MM-DD) instead of today
    #[arg(long, value_parser = parse_today)]
    pub today: Option<chrono::NaiveDate>,

    /// Keep running: press Enter to reload, q to quit
    #[arg(long)]
    pub interactive: bool,
}

fn parse_today(value: &str) -> Result<chrono::NaiveDate, String> {
    crate::store::parse_due_date(value).map_err(|e| e.to_string())
}
