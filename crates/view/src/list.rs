//! Shared fetch-lifecycle controller for list views.
//!
//! Every list on the site (new items, explore grid, hot collections, top
//! sellers, author items) runs the same state machine: cancel the
//! previous fetch, show skeletons, commit `Ready`/`Empty`/`Failed`, and
//! never let a stale response overwrite newer state. This controller
//! implements it once, parameterized by the fetch-and-normalize closure.

use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::RwLock;
use ultraverse_market_api::{CancelToken, Result as ApiResult};

use crate::lifecycle::Lifecycle;
use crate::state::ViewState;

/// Behavior knobs for a list view.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Initial visible window, and the skeleton count while loading.
    pub page_size: usize,
    /// How much `load_more` grows the window.
    pub page_increment: usize,
    /// Hard cap applied to the fetched list (carousel windows).
    pub limit: Option<usize>,
    /// Skeleton placeholders shown while loading.
    pub skeleton_count: usize,
    /// User-facing message for the failed state.
    pub error_message: String,
}

impl ListConfig {
    /// A paginated grid: `page_size` visible, growing by `page_increment`.
    pub fn paged(page_size: usize, page_increment: usize) -> Self {
        Self {
            page_size,
            page_increment,
            limit: None,
            skeleton_count: page_size,
            error_message: "Failed to load.".to_string(),
        }
    }

    /// A fixed window: the fetched list is truncated to `limit` and there
    /// is no pagination.
    pub fn capped(limit: usize) -> Self {
        Self {
            page_size: limit,
            page_increment: 0,
            limit: Some(limit),
            skeleton_count: limit,
            error_message: "Failed to load.".to_string(),
        }
    }

    pub fn with_skeleton_count(mut self, count: usize) -> Self {
        self.skeleton_count = count;
        self
    }

    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::paged(8, 4)
    }
}

/// The shared list state machine. Cheap to clone; clones share state.
pub struct ListController<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<T> {
    config: ListConfig,
    lifecycle: Lifecycle,
    state: RwLock<ListState<T>>,
}

struct ListState<T> {
    phase: ViewState<Vec<T>>,
    visible: usize,
}

impl<T: Clone> ListController<T> {
    pub fn new(config: ListConfig) -> Self {
        let visible = config.page_size;
        Self {
            inner: Arc::new(Inner {
                config,
                lifecycle: Lifecycle::new(),
                state: RwLock::new(ListState {
                    phase: ViewState::Loading,
                    visible,
                }),
            }),
        }
    }

    /// Run one load cycle: cancel the previous fetch, enter `Loading`,
    /// run `fetch`, and commit the outcome, unless a newer load
    /// superseded this one in the meantime, in which case the result is
    /// dropped. A cancelled fetch leaves the state to its successor.
    pub async fn refresh<F, Fut>(&self, fetch: F)
    where
        F: FnOnce(CancelToken) -> Fut,
        Fut: Future<Output = ApiResult<Vec<T>>>,
    {
        let (generation, cancel) = self.inner.lifecycle.begin().await;
        {
            let mut state = self.inner.state.write().await;
            if !self.inner.lifecycle.is_current(generation) {
                return;
            }
            state.phase = ViewState::Loading;
            state.visible = self.inner.config.page_size;
        }

        let outcome = fetch(cancel).await;

        let mut state = self.inner.state.write().await;
        if !self.inner.lifecycle.is_current(generation) {
            debug!("dropping stale list response");
            return;
        }
        match outcome {
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                warn!("list fetch failed: {err}");
                state.phase = ViewState::Failed(self.inner.config.error_message.clone());
            }
            Ok(mut items) => {
                if let Some(limit) = self.inner.config.limit {
                    items.truncate(limit);
                }
                state.visible = self.inner.config.page_size;
                state.phase = if items.is_empty() {
                    ViewState::Empty
                } else {
                    ViewState::Ready(items)
                };
            }
        }
    }

    /// Snapshot of the current phase.
    pub async fn state(&self) -> ViewState<Vec<T>> {
        self.inner.state.read().await.phase.clone()
    }

    /// The full held list; empty unless `Ready`.
    pub async fn items(&self) -> Vec<T> {
        self.inner
            .state
            .read()
            .await
            .phase
            .ready()
            .cloned()
            .unwrap_or_default()
    }

    /// How many cards are currently on screen.
    pub async fn visible_count(&self) -> usize {
        let state = self.inner.state.read().await;
        match state.phase.ready() {
            Some(items) => state.visible.min(items.len()),
            None => 0,
        }
    }

    /// The visible slice of the held list, in fetch order.
    pub async fn visible_items(&self) -> Vec<T> {
        let state = self.inner.state.read().await;
        match state.phase.ready() {
            Some(items) => items[..state.visible.min(items.len())].to_vec(),
            None => Vec::new(),
        }
    }

    /// Whether the window still hides part of the held list.
    pub async fn has_more(&self) -> bool {
        let state = self.inner.state.read().await;
        match state.phase.ready() {
            Some(items) => state.visible < items.len(),
            None => false,
        }
    }

    /// Grow the visible window by the configured increment, capped at the
    /// held list length. Returns the new visible count.
    pub async fn load_more(&self) -> usize {
        let mut state = self.inner.state.write().await;
        if let ViewState::Ready(items) = &state.phase {
            let len = items.len();
            state.visible = (state.visible + self.inner.config.page_increment).min(len);
            state.visible
        } else {
            0
        }
    }

    /// Skeleton placeholders to render while `Loading`.
    pub fn skeleton_count(&self) -> usize {
        self.inner.config.skeleton_count
    }

    pub fn config(&self) -> &ListConfig {
        &self.inner.config
    }

    /// View teardown: cancel the in-flight fetch and invalidate any late
    /// commit.
    pub async fn teardown(&self) {
        self.inner.lifecycle.teardown().await;
    }
}
