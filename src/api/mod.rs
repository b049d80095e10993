//! Remote player APIs.
//!
//! Two incompatible services sit behind the [`PlayerApi`] trait:
//!
//! - [`balldontlie::BallDontLie`]: search plus per-game box scores
//! - [`sportsdb::SportsDb`]: search plus a biographical lookup
//!
//! Callers go through [`search_player`] and [`get_player_stats`], which never
//! return an error. Failures are logged and folded into a [`Lookup`] so the
//! prompt loop can decide what to tell the user.

pub mod balldontlie;
pub mod sportsdb;
pub mod types;

use log::{error, info};

use crate::{cli::types::PlayerId, error::StatsError, Result};
pub use types::{PlayerDetail, PlayerReport, PlayerSummary};

#[cfg(test)]
mod tests;

/// A player data service.
///
/// Implementations report transport and decoding problems as errors and
/// "nothing there" as an empty `Vec` / `None`.
#[allow(async_fn_in_trait)]
pub trait PlayerApi {
    /// Find players whose name matches `query`.
    async fn search(&self, query: &str) -> Result<Vec<PlayerSummary>>;

    /// Fetch the stats or details for one player from a previous search.
    async fn fetch(&self, id: &PlayerId) -> Result<Option<PlayerReport>>;
}

/// Outcome of a client call.
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    /// Well-formed answer with nothing in it.
    Empty,
    /// Request, status or body failure. Already logged.
    Failed(StatsError),
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            _ => None,
        }
    }
}

/// Punctuation that shows up in real player names.
const NAME_PUNCTUATION: [char; 3] = ['\'', '-', '.'];

/// Strip everything but letters, digits, spaces and name punctuation, then
/// collapse whitespace.
///
/// Returns `None` when nothing searchable is left.
pub fn clean_query(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || NAME_PUNCTUATION.contains(c))
        .collect();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if !cleaned.chars().any(char::is_alphanumeric) {
        None
    } else {
        Some(cleaned)
    }
}

/// Search for players by name.
pub async fn search_player<A: PlayerApi>(api: &A, name: &str) -> Lookup<Vec<PlayerSummary>> {
    let Some(query) = clean_query(name) else {
        info!("Nothing searchable in {:?}", name);
        return Lookup::Empty;
    };

    match api.search(&query).await {
        Ok(players) if players.is_empty() => {
            info!("{}", StatsError::NotFound { query });
            Lookup::Empty
        }
        Ok(players) => Lookup::Found(players),
        Err(e) => {
            error!("Error searching for player: {}", e);
            Lookup::Failed(e)
        }
    }
}

/// Fetch stats (or details) for a player picked from [`search_player`].
pub async fn get_player_stats<A: PlayerApi>(api: &A, id: &PlayerId) -> Lookup<PlayerReport> {
    match api.fetch(id).await {
        Ok(Some(report)) => Lookup::Found(report),
        Ok(None) => {
            info!("No stats found for player {}", id);
            Lookup::Empty
        }
        Err(e) => {
            error!("Error getting player stats: {}", e);
            Lookup::Failed(e)
        }
    }
}
