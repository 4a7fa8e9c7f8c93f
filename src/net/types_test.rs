use super::*;
use crate::state::session::SessionContext;

fn ctx() -> SessionContext {
    SessionContext {
        room_code: "ABCD".to_owned(),
        username: "alice".to_owned(),
        quiz_id: "7".to_owned(),
        player_id: "12".to_owned(),
    }
}

#[test]
fn start_game_serializes_room_and_username() {
    let msg = OutboundMessage::start_game(&ctx());
    assert_eq!(
        serde_json::to_value(&msg).expect("serialize"),
        serde_json::json!({
            "type": "start_game",
            "room_code": "ABCD",
            "username": "alice"
        })
    );
}

#[test]
fn submit_answer_serializes_ids_in_document_order() {
    let msg = OutboundMessage::submit_answer(&ctx(), vec!["3".to_owned(), "7".to_owned()])
        .expect("non-empty selection");
    assert_eq!(
        serde_json::to_value(&msg).expect("serialize"),
        serde_json::json!({
            "type": "submit_answer",
            "room_code": "ABCD",
            "username": "alice",
            "answer_ids": ["3", "7"]
        })
    );
}

#[test]
fn submit_answer_requires_at_least_one_id() {
    assert_eq!(OutboundMessage::submit_answer(&ctx(), Vec::new()), None);
}

#[test]
fn submit_answer_keeps_duplicate_ids() {
    let msg = OutboundMessage::submit_answer(&ctx(), vec!["3".to_owned(), "3".to_owned()])
        .expect("non-empty selection");
    let OutboundMessage::SubmitAnswer { answer_ids, .. } = msg else {
        panic!("expected submit_answer");
    };
    assert_eq!(answer_ids, vec!["3", "3"]);
}

#[test]
fn inbound_question_message_parses_payload() {
    let msg: InboundMessage = serde_json::from_str(
        r#"{"type":"show_question","question":{"id":5,"text":"2+2?","url":"/quiz/7/question/5/"}}"#,
    )
    .expect("decode");

    assert_eq!(msg.kind, "show_question");
    let question = msg.question.expect("question payload");
    assert_eq!(question.id, Some(5));
    assert_eq!(question.text.as_deref(), Some("2+2?"));
    assert_eq!(question.url.as_deref(), Some("/quiz/7/question/5/"));
}

#[test]
fn inbound_envelope_tolerates_extra_fields() {
    // The server's start_game broadcast also carries the room code.
    let msg: InboundMessage =
        serde_json::from_str(r#"{"type":"start_game","room_code":"ABCD"}"#).expect("decode");
    assert_eq!(msg.kind, "start_game");
    assert!(msg.question.is_none());
    assert!(msg.results.is_none());
}

#[test]
fn inbound_results_are_kept_verbatim() {
    let msg: InboundMessage = serde_json::from_str(
        r#"{"type":"show_results","results":[{"player_username":"alice","score":10}]}"#,
    )
    .expect("decode");
    assert_eq!(
        msg.results,
        Some(serde_json::json!([{"player_username": "alice", "score": 10}]))
    );
}
