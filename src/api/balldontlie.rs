//! Stats variant: player search and season game logs.

use log::warn;
use reqwest::Client;
use serde::Deserialize;

use super::{
    types::{or_placeholder, NO_TEAM},
    PlayerApi, PlayerReport, PlayerSummary,
};
use crate::{
    cli::types::PlayerId,
    core::http::{build_client, get_json},
    stats::{normalize_games, RawGameLine},
    Result,
};

/// Base path for the balldontlie v1 API.
pub const BASE_URL: &str = "https://www.balldontlie.io/api/v1";

/// One regular season's worth of games.
pub const GAMES_PER_PAGE: &str = "82";

/// Every response wraps its rows in `data`, which may be absent or null.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    id: Option<u64>,
    first_name: Option<String>,
    last_name: Option<String>,
    team: Option<RawTeam>,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGame {
    game: Option<RawGameRef>,
    pts: Option<f64>,
    ast: Option<f64>,
    reb: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawGameRef {
    date: Option<String>,
}

impl RawPlayer {
    fn into_summary(self) -> Option<PlayerSummary> {
        let id = self.id?;
        let name = [self.first_name, self.last_name]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            warn!("Skipping unnamed player {}", id);
            return None;
        }

        Some(PlayerSummary {
            id: PlayerId::from(id),
            name,
            team: or_placeholder(self.team.and_then(|t| t.full_name), NO_TEAM),
        })
    }
}

impl RawGame {
    fn into_line(self) -> RawGameLine {
        RawGameLine {
            date: self.game.and_then(|game| game.date),
            points: self.pts,
            assists: self.ast,
            rebounds: self.reb,
        }
    }
}

/// Client for the stats API.
#[derive(Debug, Clone)]
pub struct BallDontLie {
    client: Client,
    base_url: String,
}

impl BallDontLie {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(build_client()?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl PlayerApi for BallDontLie {
    async fn search(&self, query: &str) -> Result<Vec<PlayerSummary>> {
        let url = format!("{}/players", self.base_url);
        let env: Envelope<RawPlayer> = get_json(&self.client, &url, &[("search", query)]).await?;

        Ok(env
            .data
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawPlayer::into_summary)
            .collect())
    }

    async fn fetch(&self, id: &PlayerId) -> Result<Option<PlayerReport>> {
        let url = format!("{}/stats", self.base_url);
        let params = [("player_ids[]", id.as_str()), ("per_page", GAMES_PER_PAGE)];
        let env: Envelope<RawGame> = get_json(&self.client, &url, &params).await?;

        let games = normalize_games(
            env.data
                .unwrap_or_default()
                .into_iter()
                .map(RawGame::into_line)
                .collect(),
        );
        if games.is_empty() {
            return Ok(None);
        }
        Ok(Some(PlayerReport::Stats(games)))
    }
}
