//! Unit tests for the client boundary

use super::*;
use crate::stats::GameStat;
use chrono::NaiveDate;
use std::cell::Cell;

/// Canned API that records how often it was called.
struct FakeApi {
    players: Option<Vec<PlayerSummary>>,
    report: Option<Option<PlayerReport>>,
    calls: Cell<usize>,
}

impl FakeApi {
    fn new(players: Option<Vec<PlayerSummary>>, report: Option<Option<PlayerReport>>) -> Self {
        Self {
            players,
            report,
            calls: Cell::new(0),
        }
    }
}

fn server_error() -> StatsError {
    StatsError::Status {
        url: "http://fake.test".to_string(),
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl PlayerApi for FakeApi {
    async fn search(&self, _query: &str) -> Result<Vec<PlayerSummary>> {
        self.calls.set(self.calls.get() + 1);
        self.players.clone().ok_or_else(server_error)
    }

    async fn fetch(&self, _id: &PlayerId) -> Result<Option<PlayerReport>> {
        self.calls.set(self.calls.get() + 1);
        self.report.clone().ok_or_else(server_error)
    }
}

fn lebron() -> PlayerSummary {
    PlayerSummary {
        id: PlayerId::new("237"),
        name: "LeBron James".to_string(),
        team: "Los Angeles Lakers".to_string(),
    }
}

#[cfg(test)]
mod clean_query_tests {
    use super::*;

    #[test]
    fn test_clean_query_strips_symbols() {
        assert_eq!(clean_query("LeBron James!"), Some("LeBron James".to_string()));
        assert_eq!(clean_query("Luka   Dončić"), Some("Luka Dončić".to_string()));
        assert_eq!(clean_query("Kevin (KD) Durant?"), Some("Kevin KD Durant".to_string()));
    }

    #[test]
    fn test_clean_query_keeps_name_punctuation() {
        assert_eq!(
            clean_query("Shai Gilgeous-Alexander"),
            Some("Shai Gilgeous-Alexander".to_string())
        );
        assert_eq!(clean_query("De'Aaron Fox"), Some("De'Aaron Fox".to_string()));
        assert_eq!(clean_query("P.J. Tucker"), Some("P.J. Tucker".to_string()));
        assert_eq!(clean_query("  O'Neal  "), Some("O'Neal".to_string()));
    }

    #[test]
    fn test_clean_query_nothing_left() {
        assert_eq!(clean_query(""), None);
        assert_eq!(clean_query("   "), None);
        assert_eq!(clean_query("!@#$%"), None);
        assert_eq!(clean_query("- . '"), None);
    }
}

#[cfg(test)]
mod boundary_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_found() {
        let api = FakeApi::new(Some(vec![lebron()]), None);
        let players = search_player(&api, "LeBron James").await.found().unwrap();
        assert_eq!(players.len(), 1);
        assert!(!players[0].id.as_str().is_empty());
        assert!(!players[0].name.is_empty());
    }

    #[tokio::test]
    async fn test_search_zero_results_is_empty() {
        let api = FakeApi::new(Some(Vec::new()), None);
        assert!(matches!(search_player(&api, "qwzx").await, Lookup::Empty));
    }

    #[tokio::test]
    async fn test_search_failure_is_caught() {
        let api = FakeApi::new(None, None);
        match search_player(&api, "LeBron").await {
            Lookup::Failed(e) => assert!(matches!(e, StatsError::Status { .. })),
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_search_skips_request() {
        let api = FakeApi::new(Some(vec![lebron()]), None);
        assert!(matches!(search_player(&api, " ?! ").await, Lookup::Empty));
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_get_player_stats_outcomes() {
        let games = vec![GameStat {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            points: 30.0,
            assists: 8.0,
            rebounds: 7.0,
        }];
        let id = PlayerId::new("237");

        let api = FakeApi::new(None, Some(Some(PlayerReport::Stats(games.clone()))));
        let lookup = get_player_stats(&api, &id).await;
        assert_eq!(lookup.found(), Some(PlayerReport::Stats(games)));

        let api = FakeApi::new(None, Some(None));
        assert!(matches!(get_player_stats(&api, &id).await, Lookup::Empty));

        let api = FakeApi::new(None, None);
        assert!(matches!(
            get_player_stats(&api, &id).await,
            Lookup::Failed(_)
        ));
    }
}
