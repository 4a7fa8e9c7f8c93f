//! Pure planning for inbound message dispatch.
//!
//! Mapping an envelope to a `ViewCommand` is kept free of DOM and socket
//! handles so dispatch decisions stay natively testable.

#[cfg(test)]
#[path = "socket_client_plan_test.rs"]
mod socket_client_plan_test;

use crate::net::types::InboundMessage;

/// What an inbound message asks the client to do to the page.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCommand {
    /// Arm the start control so the creator can kick the game off.
    ArmStartControl,
    /// Fetch a question fragment and make it the current view.
    LoadQuestion { url: String },
    /// Clear the page and fetch the leaderboard for this results blob.
    ShowResults { results: serde_json::Value },
    /// Unknown discriminant or unusable payload: no DOM mutation, no send.
    Ignore,
}

/// Decide the view command for an inbound message.
pub fn plan_view_command(msg: &InboundMessage) -> ViewCommand {
    match msg.kind.as_str() {
        "start_game" => ViewCommand::ArmStartControl,
        "show_question" => {
            let url = msg
                .question
                .as_ref()
                .and_then(|q| q.url.clone())
                .filter(|url| !url.is_empty());
            match url {
                Some(url) => ViewCommand::LoadQuestion { url },
                None => ViewCommand::Ignore,
            }
        }
        "show_results" => ViewCommand::ShowResults {
            results: msg.results.clone().unwrap_or(serde_json::Value::Null),
        },
        _ => ViewCommand::Ignore,
    }
}
