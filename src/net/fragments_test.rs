use super::*;

#[test]
fn leaderboard_url_encodes_results_json() {
    let results = serde_json::json!([{"player_username": "alice", "score": 10}]);
    assert_eq!(
        leaderboard_url(&results),
        "/multiplayer_leaderboard/?results=%5B%7B%22player_username%22%3A%22alice%22%2C%22score%22%3A10%7D%5D"
    );
}

#[test]
fn leaderboard_url_round_trips_through_decoding() {
    let results = serde_json::json!([
        {"player_username": "bob", "score": 7},
        {"player_username": "alice", "score": 3}
    ]);
    let url = leaderboard_url(&results);
    let encoded = url
        .strip_prefix("/multiplayer_leaderboard/?results=")
        .expect("query prefix");
    let decoded = urlencoding::decode(encoded).expect("valid encoding");
    let parsed: serde_json::Value = serde_json::from_str(&decoded).expect("json");
    assert_eq!(parsed, results);
}

#[test]
fn leaderboard_url_handles_null_results() {
    assert_eq!(
        leaderboard_url(&serde_json::Value::Null),
        "/multiplayer_leaderboard/?results=null"
    );
}
