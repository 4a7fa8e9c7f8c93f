use super::*;
use std::collections::HashMap;

#[test]
fn from_attributes_reads_all_four_attributes() {
    let attrs: HashMap<&str, &str> = HashMap::from([
        ("room-code", "ABCD"),
        ("username", "alice"),
        ("quiz", "7"),
        ("player", "12"),
    ]);

    let ctx = SessionContext::from_attributes(|name| attrs.get(name).map(|v| (*v).to_owned()));

    assert_eq!(ctx.room_code, "ABCD");
    assert_eq!(ctx.username, "alice");
    assert_eq!(ctx.quiz_id, "7");
    assert_eq!(ctx.player_id, "12");
}

#[test]
fn missing_attributes_default_to_empty_strings() {
    let ctx = SessionContext::from_attributes(|_| None);
    assert_eq!(ctx, SessionContext::default());
}

#[test]
fn ws_url_uses_scheme_from_page_protocol() {
    assert_eq!(
        ws_url(false, "localhost:8000", "ABCD"),
        "ws://localhost:8000/ws/multiplayer/ABCD/"
    );
    assert_eq!(
        ws_url(true, "quiz.example.com", "ZZZZ"),
        "wss://quiz.example.com/ws/multiplayer/ZZZZ/"
    );
}
