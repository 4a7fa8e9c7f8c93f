//! Fragment injection and body clearing.
//!
//! The page body holds exactly one current view at a time: the pristine
//! initial markup, a question fragment, or a leaderboard fragment. Every
//! body child except the `#game-container` root is removed before a new
//! fragment goes in.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Selector for every body child that is not the preserved root container.
#[cfg(feature = "hydrate")]
const NON_ROOT_CHILDREN: &str = "body > *:not(#game-container)";

/// Remove every body child except the `#game-container` root.
#[cfg(feature = "hydrate")]
pub fn clear_body_except_root() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(stale) = document.query_selector_all(NON_ROOT_CHILDREN) else {
        return;
    };
    for i in 0..stale.length() {
        if let Some(element) = stale.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            element.remove();
        }
    }
}

/// Make a question fragment the current view.
///
/// Reuses an existing `#question-container` when the initial markup ships
/// one; otherwise a fresh container is appended to the body.
#[cfg(feature = "hydrate")]
pub fn render_question(html: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    clear_body_except_root();

    if let Some(container) = document.get_element_by_id("question-container") {
        container.set_inner_html(html);
        return;
    }

    let Some(body) = document.body() else {
        return;
    };
    if let Ok(container) = document.create_element("div") {
        container.set_id("question-container");
        container.set_inner_html(html);
        let _ = body.append_child(&container);
    }
}

/// Append a freshly created `#leaderboard-container` holding the fragment.
///
/// The body is expected to have been cleared when the results transition
/// began; this only adds the new view.
#[cfg(feature = "hydrate")]
pub fn render_leaderboard(html: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    if let Ok(container) = document.create_element("div") {
        container.set_id("leaderboard-container");
        container.set_inner_html(html);
        let _ = body.append_child(&container);
    }
}
