//! Game log normalization and per-stat averages.
//!
//! Raw game lines arrive from the stats API with optional numbers and
//! timestamped dates. [`normalize_games`] turns them into [`GameStat`] rows
//! sorted most-recent-first, which is the order every consumer
//! (charts, averages, "last game") relies on.

use chrono::NaiveDate;
use log::warn;
use std::fmt;


/// One game as reported by the remote API, before cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGameLine {
    pub date: Option<String>,
    pub points: Option<f64>,
    pub assists: Option<f64>,
    pub rebounds: Option<f64>,
}

/// One game's counting stats for a single player.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStat {
    pub date: NaiveDate,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
}

/// The statistics that get charted and averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Points,
    Assists,
    Rebounds,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [StatKind::Points, StatKind::Assists, StatKind::Rebounds];

    /// Read this stat off a game.
    pub fn value(&self, game: &GameStat) -> f64 {
        match self {
            StatKind::Points => game.points,
            StatKind::Assists => game.assists,
            StatKind::Rebounds => game.rebounds,
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatKind::Points => "points",
            StatKind::Assists => "assists",
            StatKind::Rebounds => "rebounds",
        };
        write!(f, "{}", s)
    }
}

/// Parse the calendar date out of `2024-01-05` or `2024-01-05T00:00:00.000Z`.
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Clean raw game lines into [`GameStat`]s sorted by date, most recent first.
///
/// Missing numbers count as 0. Lines without a usable date are dropped.
/// Games on the same day keep their incoming order.
pub fn normalize_games(raw: Vec<RawGameLine>) -> Vec<GameStat> {
    let mut games: Vec<GameStat> = raw
        .into_iter()
        .filter_map(|line| {
            let Some(date) = line.date.as_deref().and_then(parse_game_date) else {
                warn!("Skipping game with unusable date: {:?}", line.date);
                return None;
            };
            Some(GameStat {
                date,
                points: line.points.unwrap_or(0.0),
                assists: line.assists.unwrap_or(0.0),
                rebounds: line.rebounds.unwrap_or(0.0),
            })
        })
        .collect();

    // sort_by is stable
    games.sort_by(|a, b| b.date.cmp(&a.date));
    games
}

/// Values of one stat in the order the games are held.
pub fn series(games: &[GameStat], kind: StatKind) -> Vec<f64> {
    games.iter().map(|g| kind.value(g)).collect()
}

/// Arithmetic mean of `kind` across all games, or `None` when there are none.
pub fn average(games: &[GameStat], kind: StatKind) -> Option<f64> {
    if games.is_empty() {
        return None;
    }
    let total: f64 = games.iter().map(|g| kind.value(g)).sum();
    Some(total / games.len() as f64)
}

/// The `n` most recent games of an already-normalized log.
pub fn recent(games: &[GameStat], n: usize) -> &[GameStat] {
    &games[..n.min(games.len())]
}
