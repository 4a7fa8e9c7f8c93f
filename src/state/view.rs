#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic generation counter for the page's current view.
///
/// Every `show_question`/`show_results` transition begins a new generation
/// before its fragment fetch is issued. A fetch result is applied only if
/// the generation it was issued under is still current, so a slow fetch
/// can never overwrite a view installed by a later inbound message.
///
/// Clones share the same counter; the session hands clones to its async
/// fetch tasks.
#[derive(Clone, Debug, Default)]
pub struct ViewGeneration(Rc<Cell<u64>>);

impl ViewGeneration {
    /// Start a new view generation and return its token.
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether a previously issued token still names the current view.
    #[must_use]
    pub fn is_current(&self, issued: u64) -> bool {
        self.0.get() == issued
    }
}

/// Claim tracker for the start control's one-shot click listener.
///
/// At most one listener may be armed at a time, so repeated `start_game`
/// prompts never stack listeners on the same rendered control. Replacing
/// the view that holds the control releases the claim (the listener died
/// with the element), as does the listener firing; a later prompt over a
/// freshly rendered control can then re-arm.
///
/// Clones share the same claim.
#[derive(Clone, Debug, Default)]
pub struct StartArm(Rc<Cell<bool>>);

impl StartArm {
    /// Claim the control for arming. Returns `false` while armed.
    pub fn try_claim(&self) -> bool {
        if self.0.get() {
            return false;
        }
        self.0.set(true);
        true
    }

    /// Release the claim.
    pub fn release(&self) {
        self.0.set(false);
    }
}
