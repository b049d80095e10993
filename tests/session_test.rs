//! End-to-end prompt loop tests against a mock stats API

use nba_stats::{api::balldontlie::BallDontLie, api::sportsdb::SportsDb, session::Session};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn stats_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("search", "Anthony"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 140, "first_name": "Anthony", "last_name": "Davis",
                  "team": { "full_name": "Los Angeles Lakers" } },
                { "id": 3547254, "first_name": "Anthony", "last_name": "Edwards",
                  "team": { "full_name": "Minnesota Timberwolves" } }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("search", "Nobody Atall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .and(query_param("player_ids[]", "3547254"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "game": { "date": "2024-01-03" }, "pts": 31, "ast": 5, "reb": 8 },
                { "game": { "date": "2024-01-05" }, "pts": 25, "ast": 7, "reb": 6 },
                { "game": { "date": "2024-01-01" }, "pts": 40, "ast": null, "reb": 9 }
            ]
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_search_select_and_chart() {
    let server = stats_server().await;
    let api = BallDontLie::new(server.uri()).unwrap();

    let script = "Nobody Atall\n\nAnthony\n5\n2\n\nEXIT\n";
    let mut session = Session::new(&api, script.as_bytes(), Vec::new());
    session.run().await.unwrap();
    let (_, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("No players found."));
    assert!(out.contains("1. Anthony Davis (Los Angeles Lakers)"));
    assert!(out.contains("2. Anthony Edwards (Minnesota Timberwolves)"));
    assert!(out.contains("Please enter a number between 1 and 2."));
    assert!(out.contains("Getting stats for Anthony Edwards..."));

    assert!(out.contains("POINTS OVER LAST 3 GAMES:"));
    assert!(out.contains("Average points: 32.0"));
    assert!(out.contains("Average assists: 4.0"));
    assert!(out.contains("Average rebounds: 7.7"));
    assert!(out.contains("Last game (2024-01-05): 25 pts, 7 ast, 6 reb"));
}

#[tokio::test]
async fn test_detail_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/searchplayers.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "player": [ { "idPlayer": "34161049", "strPlayer": "Victor Wembanyama", "strTeam": "San Antonio Spurs" } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lookupplayer.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "players": [ {
                "strPlayer": "Victor Wembanyama",
                "strTeam": "San Antonio Spurs",
                "strPosition": "Center",
                "dateBorn": "2004-01-04"
            } ]
        })))
        .mount(&server)
        .await;

    let api = SportsDb::new(server.uri()).unwrap();
    let mut session = Session::new(&api, "wemby\n".as_bytes(), Vec::new());
    session.run().await.unwrap();
    let (_, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert!(!out.contains("Multiple players found:"));
    let info = out.find("Player Information:").unwrap();
    let tail = &out[info..];
    assert!(tail.contains(
        "Name: Victor Wembanyama\nTeam: San Antonio Spurs\nPosition: Center\nBirth Date: 2004-01-04\nDescription: No description available.\n"
    ));
}
