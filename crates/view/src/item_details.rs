//! Controller behind the item-details page.

use std::sync::Arc;

use log::warn;
use tokio::sync::RwLock;
use ultraverse_market_api::ApiClient;
use ultraverse_market_model::ItemDetail;

use crate::lifecycle::Lifecycle;
use crate::state::ViewState;

/// Item-details page: a single fetch rendered through the full-page
/// skeleton until the record is ready.
#[derive(Clone)]
pub struct ItemDetailsController {
    api: ApiClient,
    inner: Arc<Inner>,
}

struct Inner {
    lifecycle: Lifecycle,
    state: RwLock<ViewState<ItemDetail>>,
}

impl ItemDetailsController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            inner: Arc::new(Inner {
                lifecycle: Lifecycle::new(),
                state: RwLock::new(ViewState::Loading),
            }),
        }
    }

    /// Load the detail record for `nft_id`.
    pub async fn load(&self, nft_id: &str) {
        let (generation, cancel) = self.inner.lifecycle.begin().await;
        {
            let mut state = self.inner.state.write().await;
            if !self.inner.lifecycle.is_current(generation) {
                return;
            }
            *state = ViewState::Loading;
        }

        let outcome = self.api.item_details(nft_id, &cancel).await;

        let mut state = self.inner.state.write().await;
        if !self.inner.lifecycle.is_current(generation) {
            return;
        }
        match outcome {
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                warn!("item details fetch failed: {err}");
                *state = ViewState::Failed("Failed to load item.".to_string());
            }
            Ok(body) => {
                *state = match ItemDetail::from_value(&body, nft_id) {
                    Some(detail) => ViewState::Ready(detail),
                    None => ViewState::Empty,
                };
            }
        }
    }

    pub async fn state(&self) -> ViewState<ItemDetail> {
        self.inner.state.read().await.clone()
    }

    pub async fn teardown(&self) {
        self.inner.lifecycle.teardown().await;
    }
}
