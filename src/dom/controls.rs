//! Wiring for the interactive controls shipped inside fragments.
//!
//! ERROR HANDLING
//! ==============
//! Missing controls are normal (fragments only ship the buttons that apply
//! to them), so lookups degrade silently. The only user-facing failure is
//! the empty-selection alert on answer submission.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use crate::net::socket_client::ClientSession;
#[cfg(feature = "hydrate")]
use crate::net::types::OutboundMessage;

/// Selector for every currently checked answer input.
#[cfg(feature = "hydrate")]
const CHECKED_ANSWERS: &str =
    "input[type=\"checkbox\"]:checked, input[type=\"radio\"]:checked";

#[cfg(feature = "hydrate")]
const EMPTY_SELECTION_ALERT: &str = "Please select at least one answer before submitting.";

/// Arm the `#start-quiz` control with a one-shot click listener.
///
/// The listener fires at most once per arming; the server re-broadcasts
/// `start_game` when the control should be armed again.
#[cfg(feature = "hydrate")]
pub fn arm_start_control(session: &ClientSession) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(control) = document.get_element_by_id("start-quiz") else {
        log::warn!("start_game received but #start-quiz is not in the page");
        return;
    };
    if !session.arm_start() {
        // An armed one-shot listener is already waiting on this control.
        return;
    }

    let session = session.clone();
    let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        session.disarm_start();
        let msg = OutboundMessage::start_game(session.context());
        if !session.send(&msg) {
            log::error!("failed to send start_game: connection is gone");
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    let _ = control.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        on_click.as_ref().unchecked_ref(),
        &options,
    );
    // The browser owns the callback for the rest of the page's lifetime.
    on_click.forget();
}

/// Wire the submit controls a question fragment ships.
///
/// `#next-question-button` and `#finish-button` get identical handling;
/// fragments carry one or the other depending on quiz position.
#[cfg(feature = "hydrate")]
pub fn wire_submit_controls(session: &ClientSession) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for id in ["next-question-button", "finish-button"] {
        if let Some(control) = document.get_element_by_id(id) {
            attach_submit_listener(&control, session.clone());
        }
    }
}

#[cfg(feature = "hydrate")]
fn attach_submit_listener(control: &web_sys::Element, session: ClientSession) {
    let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        submit_checked_answers(&session);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    // Listener lives until the fragment is replaced and the element dropped.
    on_click.forget();
}

/// Collect the checked answers and send them, or alert on empty selection.
#[cfg(feature = "hydrate")]
fn submit_checked_answers(session: &ClientSession) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let answer_ids = collect_checked_values(&document);
    match OutboundMessage::submit_answer(session.context(), answer_ids) {
        Some(msg) => {
            if !session.send(&msg) {
                log::error!("failed to send submit_answer: connection is gone");
            }
        }
        None => {
            let _ = window.alert_with_message(EMPTY_SELECTION_ALERT);
        }
    }
}

/// Values of every checked checkbox/radio input, in document order.
///
/// Duplicates are kept; `querySelectorAll` guarantees document order.
#[cfg(feature = "hydrate")]
fn collect_checked_values(document: &web_sys::Document) -> Vec<String> {
    let Ok(checked) = document.query_selector_all(CHECKED_ANSWERS) else {
        return Vec::new();
    };
    let mut values = Vec::with_capacity(checked.length() as usize);
    for i in 0..checked.length() {
        if let Some(input) = checked
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            values.push(input.value());
        }
    }
    values
}
