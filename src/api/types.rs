//! Records produced by the API clients.

use crate::{cli::types::PlayerId, stats::GameStat};

pub const NO_TEAM: &str = "No Team";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNKNOWN: &str = "Unknown";

/// A single search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
}

/// Biographical snapshot from the lookup API.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDetail {
    pub name: String,
    pub team: String,
    pub position: String,
    pub description: String,
    pub birth_date: String,
}

/// What the second request of a lookup returns, depending on the API.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerReport {
    /// Game log, most recent game first.
    Stats(Vec<GameStat>),
    Detail(PlayerDetail),
}

/// Use `value` unless it is missing or blank.
pub(crate) fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}
