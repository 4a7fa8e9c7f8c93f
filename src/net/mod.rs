//! Networking modules for the quiz room protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `fragments` fetches server-rendered HTML
//! views, and `socket_client` manages the WebSocket lifecycle and message
//! dispatch.

pub mod fragments;
pub mod socket_client;
pub mod types;
