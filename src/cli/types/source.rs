//! Which remote API backs a session.

use crate::error::StatsError;
use std::fmt;
use std::str::FromStr;

/// The two supported data sources.
///
/// - **Stats**: per-game box scores, rendered as charts.
/// - **Detail**: biographical lookup, rendered as a text record.
///
/// # Examples
///
/// ```rust
/// use nba_stats::DataSource;
///
/// let source: DataSource = "detail".parse().unwrap();
/// assert_eq!(source, DataSource::Detail);
/// assert_eq!(DataSource::default().to_string(), "stats");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataSource {
    #[default]
    Stats,
    Detail,
}

impl DataSource {
    /// Built-in API base URL for this source.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            DataSource::Stats => crate::api::balldontlie::BASE_URL,
            DataSource::Detail => crate::api::sportsdb::BASE_URL,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataSource::Stats => "stats",
            DataSource::Detail => "detail",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DataSource {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stats" | "graph" => Ok(DataSource::Stats),
            "detail" | "details" | "info" => Ok(DataSource::Detail),
            _ => Err(StatsError::InvalidSource {
                source_name: s.to_string(),
            }),
        }
    }
}
