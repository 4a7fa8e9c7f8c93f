//! Wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Inbound frames are decoded into a permissive envelope and dispatched on
//! the `type` discriminant string, so unknown message kinds and extra fields
//! are tolerated without failing the whole frame. Outbound frames are a
//! closed serde enum so their JSON shape stays exact.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::SessionContext;

/// Server-to-client message envelope.
///
/// Payload fields are optional so one envelope covers every message kind;
/// the planner decides which fields a given discriminant actually needs.
#[derive(Clone, Debug, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub question: Option<QuestionPayload>,
    /// Results blob, forwarded verbatim to the leaderboard endpoint.
    #[serde(default)]
    pub results: Option<serde_json::Value>,
}

/// Question reference carried by `show_question` messages.
///
/// The server also sends the question `id` and `text`; only `url` drives
/// client behavior (the fragment endpoint renders the full question).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Client-to-server messages, JSON-encoded as text frames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    StartGame {
        room_code: String,
        username: String,
    },
    SubmitAnswer {
        room_code: String,
        username: String,
        answer_ids: Vec<String>,
    },
}

impl OutboundMessage {
    /// Build the `start_game` request for this session.
    pub fn start_game(ctx: &SessionContext) -> Self {
        Self::StartGame {
            room_code: ctx.room_code.clone(),
            username: ctx.username.clone(),
        }
    }

    /// Build a `submit_answer` request, or `None` when nothing is selected.
    ///
    /// Ids keep their document order and are not deduplicated.
    pub fn submit_answer(ctx: &SessionContext, answer_ids: Vec<String>) -> Option<Self> {
        if answer_ids.is_empty() {
            return None;
        }
        Some(Self::SubmitAnswer {
            room_code: ctx.room_code.clone(),
            username: ctx.username.clone(),
            answer_ids,
        })
    }
}
