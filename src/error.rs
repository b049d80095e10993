//! Error types for the NBA stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API returned status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("No players found for \"{query}\"")]
    NotFound { query: String },

    #[error("Invalid selection \"{input}\": expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("Invalid data source: {source_name} (expected \"stats\" or \"detail\")")]
    InvalidSource { source_name: String },
}
