//! Client-side session state.
//!
//! DESIGN
//! ======
//! State is deliberately tiny: an immutable session context read once from
//! the page, a connection status, and a generation counter that sequences
//! in-flight fragment fetches. Nothing is persisted.

pub mod session;
pub mod view;
