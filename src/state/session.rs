#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Immutable per-page session identity, read once at boot from the
/// `#game-container` element's attributes.
///
/// Missing attributes degrade to empty strings rather than failing; the
/// server rejects unknown rooms/players on its side of the protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub room_code: String,
    pub username: String,
    pub quiz_id: String,
    pub player_id: String,
}

impl SessionContext {
    /// Build a context from an attribute lookup function.
    ///
    /// The lookup is abstracted over so the DOM read stays in browser-only
    /// code while this constructor remains natively testable.
    pub fn from_attributes(read: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            room_code: read("room-code").unwrap_or_default(),
            username: read("username").unwrap_or_default(),
            quiz_id: read("quiz").unwrap_or_default(),
            player_id: read("player").unwrap_or_default(),
        }
    }
}

/// WebSocket connection status.
///
/// Errors are a logged side channel and never transition the status on
/// their own; only a close event moves the session to `Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Open,
    Closed,
}

/// Build the room-scoped WebSocket URL from the page's host and scheme.
pub fn ws_url(secure: bool, host: &str, room_code: &str) -> String {
    let scheme = if secure { "wss" } else { "ws" };
    format!("{scheme}://{host}/ws/multiplayer/{room_code}/")
}
