//! WASM entry point: logging setup, session context read, socket spawn.

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
use crate::net::socket_client::spawn_client_session;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionContext;

/// Runs once when the module is instantiated on a quiz room page.
///
/// Reads the session identity from the `#game-container` attributes and
/// opens the room's socket connection. A page without the root container
/// gets a logged error and no connection.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = document.get_element_by_id("game-container") else {
        log::error!("missing #game-container root element");
        return;
    };

    let ctx = SessionContext::from_attributes(|name| root.get_attribute(name));
    log::info!("initializing socket connection for room {:?}", ctx.room_code);

    let _session = spawn_client_session(ctx);
}
