//! HTTP utilities for the remote player APIs

use crate::{error::StatsError, Result};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const USER_AGENT: &str = concat!("nba-stats/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the client used by both API variants.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers())
        .build()?;
    Ok(client)
}

/// GET `url` with `params` and decode the body as `T`.
///
/// Non-2xx responses become [`StatsError::Status`]; bodies that don't match
/// `T` become [`StatsError::Json`].
pub async fn get_json<T>(client: &Client, url: &str, params: &[(&str, &str)]) -> Result<T>
where
    T: DeserializeOwned,
{
    let res = client.get(url).query(params).send().await?;
    debug!("GET {} -> {}", res.url(), res.status());

    let status = res.status();
    if !status.is_success() {
        return Err(StatsError::Status {
            url: res.url().to_string(),
            status,
        });
    }

    let body = res.text().await?;
    Ok(serde_json::from_str(&body)?)
}
