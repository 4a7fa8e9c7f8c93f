//! # quizparty-client
//!
//! WASM browser client for multiplayer quiz sessions. It owns one WebSocket
//! connection per page, relays player actions (start game, answer
//! submission) to the server, and renders server-pushed view transitions by
//! fetching server-rendered HTML fragments and injecting them into the page.
//!
//! Browser-only code is gated behind the `hydrate` feature so the protocol
//! and state logic can be compiled and tested natively.

pub mod boot;
pub mod dom;
pub mod net;
pub mod state;
