//! Imperative DOM helpers for the quiz views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views are server-rendered HTML fragments injected verbatim, so there is
//! no client-side component tree; `view` swaps fragments in and out of the
//! body and `controls` wires the interactive elements each fragment ships.
//! Everything here requires a browser environment.

pub mod controls;
pub mod view;
