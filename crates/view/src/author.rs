//! Controller behind the author profile page.

use std::sync::Arc;

use log::warn;
use serde_json::Value;
use tokio::sync::RwLock;
use ultraverse_market_api::ApiClient;
use ultraverse_market_model::value::is_truthy;
use ultraverse_market_model::{merge_records, normalize_author, normalize_item, Author, Item};

use crate::lifecycle::Lifecycle;
use crate::list::{ListConfig, ListController};
use crate::state::ViewState;

/// Author page: profile header plus the author's item grid.
///
/// Two-phase load: a seller record handed over from navigation state
/// seeds the header immediately when its id matches the requested one,
/// so the header never shows a skeleton it doesn't need. The
/// authoritative fetch then merges field-wise over the held record
/// (fresh truthy wins) before re-normalizing. The item grid is a
/// dependent fetch that starts only once the author id is resolved, and
/// is superseded along with everything else when the id changes.
#[derive(Clone)]
pub struct AuthorController {
    api: ApiClient,
    inner: Arc<Inner>,
    items: ListController<Item>,
}

struct Inner {
    lifecycle: Lifecycle,
    state: RwLock<HeaderState>,
}

struct HeaderState {
    header: ViewState<Author>,
    /// Raw record backing the header, kept for the merge step.
    held: Option<Value>,
}

impl AuthorController {
    pub fn new(api: ApiClient, items_config: ListConfig) -> Self {
        Self {
            api,
            inner: Arc::new(Inner {
                lifecycle: Lifecycle::new(),
                state: RwLock::new(HeaderState {
                    header: ViewState::Loading,
                    held: None,
                }),
            }),
            items: ListController::new(items_config),
        }
    }

    /// Load the profile for `author_id`, optionally seeded with the
    /// entity the navigation already had in hand.
    pub async fn load(&self, author_id: &str, seed: Option<Author>) {
        let (generation, cancel) = self.inner.lifecycle.begin().await;

        let seeded = seed.filter(|author| author.id.as_deref() == Some(author_id));
        {
            let mut state = self.inner.state.write().await;
            if !self.inner.lifecycle.is_current(generation) {
                return;
            }
            match &seeded {
                Some(author) => {
                    state.held = serde_json::to_value(author).ok();
                    state.header = ViewState::Ready(author.clone());
                }
                None => {
                    state.held = None;
                    state.header = ViewState::Loading;
                }
            }
        }

        let outcome = self.api.author(author_id, &cancel).await;

        {
            let mut state = self.inner.state.write().await;
            if !self.inner.lifecycle.is_current(generation) {
                return;
            }
            match outcome {
                Err(err) if err.is_cancelled() => return,
                Err(err) => {
                    warn!("author fetch failed: {err}");
                    // A seeded header stays on screen; only a bare page
                    // degrades to the error state.
                    if !state.header.is_ready() {
                        state.header = ViewState::Failed("Failed to load author.".to_string());
                    }
                }
                Ok(body) => {
                    // The record occasionally arrives nested under `author`.
                    let record = body
                        .get("author")
                        .filter(|nested| nested.is_object())
                        .cloned()
                        .unwrap_or(body);
                    if !is_truthy(&record) && state.held.is_none() {
                        state.header = ViewState::Empty;
                    } else {
                        let merged = match &state.held {
                            Some(held) => merge_records(held, &record),
                            None => record,
                        };
                        let author = normalize_author(&merged, Some(author_id));
                        state.held = Some(merged);
                        state.header = ViewState::Ready(author);
                    }
                }
            }
        }

        // Dependent fetch: only once the id is resolved into a usable
        // header. A later load() has already bumped the generation and
        // supersedes this through the item list's own lifecycle.
        let header_ready = self.inner.state.read().await.header.is_ready();
        if !header_ready || !self.inner.lifecycle.is_current(generation) {
            return;
        }
        let api = self.api.clone();
        let id = author_id.to_string();
        self.items
            .refresh(|cancel| async move {
                let raw = api.author_items(&id, &cancel).await?;
                Ok(raw
                    .iter()
                    .enumerate()
                    .map(|(index, record)| normalize_item(record, index))
                    .collect())
            })
            .await;
    }

    /// Header state: the normalized author, or the page-level
    /// loading/empty/error rendering.
    pub async fn header(&self) -> ViewState<Author> {
        self.inner.state.read().await.header.clone()
    }

    /// The author's item grid (shares the page lifecycle).
    pub fn items(&self) -> &ListController<Item> {
        &self.items
    }

    pub async fn teardown(&self) {
        self.inner.lifecycle.teardown().await;
        self.items.teardown().await;
    }
}
