//! Detail variant: player search and biographical lookup.

use reqwest::Client;
use serde::Deserialize;

use super::{
    types::{or_placeholder, NO_DESCRIPTION, NO_TEAM, UNKNOWN},
    PlayerApi, PlayerDetail, PlayerReport, PlayerSummary,
};
use crate::{
    cli::types::PlayerId,
    core::http::{build_client, get_json},
    Result,
};

/// Base path for TheSportsDB v1 API with the public test key.
pub const BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json/1";

/// `searchplayers.php` answers with `player`, `lookupplayer.php` with `players`.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    player: Option<Vec<RawPlayer>>,
}

#[derive(Debug, Deserialize)]
struct LookupEnvelope {
    players: Option<Vec<RawPlayer>>,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(rename = "idPlayer")]
    id_player: Option<String>,
    #[serde(rename = "strPlayer")]
    str_player: Option<String>,
    #[serde(rename = "strTeam")]
    str_team: Option<String>,
    #[serde(rename = "strPosition")]
    str_position: Option<String>,
    #[serde(rename = "strDescriptionEN")]
    str_description_en: Option<String>,
    #[serde(rename = "dateBorn")]
    date_born: Option<String>,
}

impl RawPlayer {
    fn into_summary(self) -> Option<PlayerSummary> {
        let id = self.id_player.filter(|id| !id.trim().is_empty())?;
        let name = self.str_player.filter(|n| !n.trim().is_empty())?;
        Some(PlayerSummary {
            id: PlayerId::new(id),
            name,
            team: or_placeholder(self.str_team, NO_TEAM),
        })
    }

    fn into_detail(self) -> PlayerDetail {
        PlayerDetail {
            name: or_placeholder(self.str_player, UNKNOWN),
            team: or_placeholder(self.str_team, NO_TEAM),
            position: or_placeholder(self.str_position, UNKNOWN),
            description: or_placeholder(self.str_description_en, NO_DESCRIPTION),
            birth_date: or_placeholder(self.date_born, UNKNOWN),
        }
    }
}

/// Client for the lookup API.
#[derive(Debug, Clone)]
pub struct SportsDb {
    client: Client,
    base_url: String,
}

impl SportsDb {
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

impl PlayerApi for SportsDb {
    async fn search(&self, query: &str) -> Result<Vec<PlayerSummary>> {
        let url = format!("{}/searchplayers.php", self.base_url);
        let env: SearchEnvelope = get_json(&self.client, &url, &[("p", query)]).await?;

        Ok(env
            .player
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawPlayer::into_summary)
            .collect())
    }

    async fn fetch(&self, id: &PlayerId) -> Result<Option<PlayerReport>> {
        let url = format!("{}/lookupplayer.php", self.base_url);
        let env: LookupEnvelope = get_json(&self.client, &url, &[("id", id.as_str())]).await?;

        Ok(env
            .players
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|p| PlayerReport::Detail(p.into_detail())))
    }
}
