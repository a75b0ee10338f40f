use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cryptosentinel",
    about = "Crypto news sentiment watchdog: one run, one decision"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the news-to-decision pipeline once and print the response envelope
    Run {
        /// End of the 24-hour news window (YYYY-MM-DD or RFC 3339); defaults to now
        #[arg(long, conflicts_with = "no_window")]
        as_of: Option<String>,
        /// Drop the date window entirely; provider relevance alone governs
        #[arg(long)]
        no_window: bool,
        /// Decide without delivering the alert email
        #[arg(long)]
        dry_run: bool,
        /// Prompt with titles and descriptions only (cheaper, less context)
        #[arg(long)]
        brief: bool,
    },
    /// Fetch the ranked article batch and print it as JSON (debugging aid)
    Fetch {
        /// End of the 24-hour news window; defaults to no window
        #[arg(long)]
        as_of: Option<String>,
        /// Override the configured fetch limit
        #[arg(long)]
        limit: Option<usize>,
        /// Write the batch to this file instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
}

/// Accepts a bare date (midnight UTC) or a full RFC 3339 timestamp.
pub fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| format!("invalid date: {raw}"));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid --as-of value '{raw}': {e}"))
}
