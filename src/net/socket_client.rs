//! WebSocket client for the quiz room protocol.
//!
//! The `ClientSession` owns the outbound message channel, the immutable
//! session context, and the view-generation counter. It is the bridge
//! between server-pushed game transitions and the page's DOM.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment. Reconnection is deliberately absent:
//! the connection lives exactly as long as the page does.

#[path = "socket_client_plan.rs"]
mod socket_client_plan;

pub use socket_client_plan::{ViewCommand, plan_view_command};

#[cfg(feature = "hydrate")]
use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::net::types::{InboundMessage, OutboundMessage};
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionContext, ws_url};
#[cfg(feature = "hydrate")]
use crate::state::view::{StartArm, ViewGeneration};

/// Handle to the page's single quiz session.
///
/// Cheap to clone; DOM event closures and fetch tasks each capture their
/// own copy. All clones share the sender, status, and generation counter.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct ClientSession {
    ctx: SessionContext,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    status: Rc<Cell<ConnectionStatus>>,
    generation: ViewGeneration,
    start_arm: StartArm,
}

#[cfg(feature = "hydrate")]
impl ClientSession {
    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Send a message to the server via the shared sender channel.
    ///
    /// Returns `false` if the channel is closed (no active connection).
    pub fn send(&self, msg: &OutboundMessage) -> bool {
        if let Ok(json) = serde_json::to_string(msg) {
            self.tx.unbounded_send(json).is_ok()
        } else {
            false
        }
    }

    /// Start a new view generation for an outgoing fragment fetch.
    pub fn begin_view(&self) -> u64 {
        self.generation.begin()
    }

    /// Whether a fetch issued under `token` may still be applied.
    pub fn view_is_current(&self, token: u64) -> bool {
        self.generation.is_current(token)
    }

    /// Claim the start control for arming. Returns `false` while a
    /// previously armed listener is still waiting, so repeated
    /// `start_game` prompts never stack listeners.
    pub fn arm_start(&self) -> bool {
        self.start_arm.try_claim()
    }

    /// Release the start-control claim: the one-shot listener fired, or
    /// the view holding the armed control was replaced.
    pub fn disarm_start(&self) {
        self.start_arm.release();
    }
}

/// Spawn the socket lifecycle as a local async task and return the session.
#[cfg(feature = "hydrate")]
pub fn spawn_client_session(ctx: SessionContext) -> ClientSession {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let session = ClientSession {
        ctx,
        tx,
        status: Rc::new(Cell::new(ConnectionStatus::Connecting)),
        generation: ViewGeneration::default(),
        start_arm: StartArm::default(),
    };

    wasm_bindgen_futures::spawn_local(run(session.clone(), rx));

    session
}

/// Connect once and process messages until the socket closes.
#[cfg(feature = "hydrate")]
async fn run(session: ClientSession, rx: futures::channel::mpsc::UnboundedReceiver<String>) {
    // Determine the WebSocket URL from the page location.
    let location = web_sys::window().map(|w| w.location());
    let secure = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .is_some_and(|p| p == "https:");
    let host = location
        .and_then(|l| l.host().ok())
        .unwrap_or_else(|| "localhost:8000".to_owned());
    let url = ws_url(secure, &host, &session.context().room_code);

    if let Err(e) = connect_and_run(&url, &session, rx).await {
        log::error!("socket connection failed: {e}");
    }

    session.status.set(ConnectionStatus::Closed);
}

/// Open the WebSocket and run the send/receive loops until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    session: &ClientSession,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::{Message, WebSocketError};
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.status.set(ConnectionStatus::Open);
    log::info!("socket connection established to {url}");

    // Forward outgoing messages from the session channel to the socket.
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: dispatch incoming frames until the socket closes.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => dispatch(session, &text),
                Ok(Message::Bytes(_)) => {}
                Err(WebSocketError::ConnectionClose(event)) => {
                    let reason = if event.reason.is_empty() {
                        "no reason provided"
                    } else {
                        event.reason.as_str()
                    };
                    log::info!(
                        "socket closed: code={} clean={} reason={reason}",
                        event.code,
                        event.was_clean
                    );
                    break;
                }
                // Errors are a side channel; the close event ends the loop.
                Err(e) => log::error!("socket error: {e}"),
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch one inbound text frame to its view command.
#[cfg(feature = "hydrate")]
fn dispatch(session: &ClientSession, text: &str) {
    let msg = match serde_json::from_str::<InboundMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            log::warn!("dropping undecodable message: {e}");
            return;
        }
    };

    match plan_view_command(&msg) {
        ViewCommand::ArmStartControl => crate::dom::controls::arm_start_control(session),
        ViewCommand::LoadQuestion { url } => load_question(session.clone(), url),
        ViewCommand::ShowResults { results } => show_results(session.clone(), &results),
        ViewCommand::Ignore => log::debug!("ignoring message type {:?}", msg.kind),
    }
}

/// Fetch a question fragment and install it as the current view.
///
/// The prior view stays untouched while the fetch is in flight and on
/// fetch failure.
#[cfg(feature = "hydrate")]
fn load_question(session: ClientSession, url: String) {
    let issued = session.begin_view();
    wasm_bindgen_futures::spawn_local(async move {
        match crate::net::fragments::fetch_fragment(&url).await {
            Ok(html) => {
                if !session.view_is_current(issued) {
                    log::debug!("discarding stale question fragment from {url}");
                    return;
                }
                crate::dom::view::render_question(&html);
                // The question replaced whatever view held the start
                // control; any unfired listener died with it.
                session.disarm_start();
                crate::dom::controls::wire_submit_controls(&session);
            }
            Err(e) => log::error!("error fetching question fragment: {e}"),
        }
    });
}

/// Clear the page and fetch the leaderboard fragment for a results blob.
///
/// The body is cleared before the fetch starts; on fetch failure the page
/// stays cleared (there is no fallback view).
#[cfg(feature = "hydrate")]
fn show_results(session: ClientSession, results: &serde_json::Value) {
    let issued = session.begin_view();
    crate::dom::view::clear_body_except_root();
    session.disarm_start();

    let url = crate::net::fragments::leaderboard_url(results);
    wasm_bindgen_futures::spawn_local(async move {
        match crate::net::fragments::fetch_fragment(&url).await {
            Ok(html) => {
                if !session.view_is_current(issued) {
                    log::debug!("discarding stale leaderboard fragment");
                    return;
                }
                crate::dom::view::render_leaderboard(&html);
            }
            Err(e) => log::error!("error fetching leaderboard fragment: {e}"),
        }
    });
}
