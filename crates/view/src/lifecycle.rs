//! Load lifecycle shared by every controller.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use ultraverse_market_api::CancelToken;

/// Generation counter plus the live cancellation token.
///
/// `begin` supersedes the previous load: its token is cancelled, and any
/// result it still produces fails the `is_current` check and must be
/// dropped instead of committed. The generation check is the liveness
/// flag of last resort: even a transport that ignores cancellation and
/// delivers a late response cannot overwrite newer state.
pub(crate) struct Lifecycle {
    generation: AtomicU64,
    cancel: Mutex<Option<CancelToken>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            cancel: Mutex::new(None),
        }
    }

    /// Start a new load, cancelling the previous one.
    pub async fn begin(&self) -> (u64, CancelToken) {
        let mut slot = self.cancel.lock().await;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancelToken::new();
        if let Some(previous) = slot.replace(token.clone()) {
            previous.cancel();
        }
        (generation, token)
    }

    /// Whether `generation` is still the live load.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Cancel the live load and invalidate any in-flight commit.
    pub async fn teardown(&self) {
        let mut slot = self.cancel.lock().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = slot.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn begin_supersedes_the_previous_load() {
        let lifecycle = Lifecycle::new();

        let (first_gen, first_token) = lifecycle.begin().await;
        assert!(lifecycle.is_current(first_gen));

        let (second_gen, second_token) = lifecycle.begin().await;
        assert!(first_token.is_cancelled());
        assert!(!second_token.is_cancelled());
        assert!(!lifecycle.is_current(first_gen));
        assert!(lifecycle.is_current(second_gen));
    }

    #[tokio::test]
    async fn teardown_invalidates_without_a_successor() {
        let lifecycle = Lifecycle::new();
        let (generation, token) = lifecycle.begin().await;

        lifecycle.teardown().await;
        assert!(token.is_cancelled());
        assert!(!lifecycle.is_current(generation));
    }
}
