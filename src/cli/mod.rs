//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::DataSource;

use crate::BASE_URL_ENV_VAR;

/// Interactive NBA player lookup.
///
/// Starts a prompt loop: type a player name, pick among the matches, and the
/// selected player's stats (or bio, with `--source detail`) are printed.
/// Type `exit` to quit.
#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "Look up NBA players from the terminal")]
pub struct Cli {
    /// Data source: `stats` (game log charts) or `detail` (player bio).
    #[clap(long, short, default_value_t = DataSource::default())]
    pub source: DataSource,

    /// Override the API base URL (or set `NBA_STATS_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Log request URLs and raw failures at debug level.
    #[clap(long)]
    pub debug: bool,
}

/// Resolve the API base URL: flag, then environment, then the source's default.
pub fn resolve_base_url(base_url: Option<String>, source: DataSource) -> String {
    let chosen = base_url
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|url| !url.trim().is_empty())
        })
        .unwrap_or_else(|| source.default_base_url().to_string());

    chosen.trim_end_matches('/').to_string()
}
