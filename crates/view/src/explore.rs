//! Controller behind the explore grid.

use std::sync::Arc;

use tokio::sync::RwLock;
use ultraverse_market_api::ApiClient;
use ultraverse_market_model::{normalize_item, Item};

use crate::list::{ListConfig, ListController};
use crate::sort::{sort_items, SortKey};
use crate::state::ViewState;

/// Explore page: a full item grid with client-side sort and "load more"
/// pagination over the single response the endpoint returns.
#[derive(Clone)]
pub struct ExploreController {
    api: ApiClient,
    list: ListController<Item>,
    sort: Arc<RwLock<SortKey>>,
}

impl ExploreController {
    pub fn new(api: ApiClient, config: ListConfig) -> Self {
        Self {
            api,
            list: ListController::new(config),
            sort: Arc::new(RwLock::new(SortKey::Default)),
        }
    }

    /// Fetch (or re-fetch) the grid, resetting the visible window.
    pub async fn refresh(&self) {
        let api = self.api.clone();
        self.list
            .refresh(|cancel| async move {
                let raw = api.explore(&cancel).await?;
                Ok(raw
                    .iter()
                    .enumerate()
                    .map(|(index, record)| normalize_item(record, index))
                    .collect())
            })
            .await;
    }

    /// Switch the sort key. Pure re-derivation; never re-fetches.
    pub async fn set_sort(&self, key: SortKey) {
        *self.sort.write().await = key;
    }

    pub async fn sort_key(&self) -> SortKey {
        *self.sort.read().await
    }

    /// Cards currently on screen: the held list sorted under the active
    /// key, then the visible window applied.
    pub async fn visible_items(&self) -> Vec<Item> {
        let key = *self.sort.read().await;
        let items = self.list.items().await;
        let count = self.list.visible_count().await;
        sort_items(&items, key).into_iter().take(count).collect()
    }

    pub async fn state(&self) -> ViewState<Vec<Item>> {
        self.list.state().await
    }

    pub async fn load_more(&self) -> usize {
        self.list.load_more().await
    }

    pub async fn has_more(&self) -> bool {
        self.list.has_more().await
    }

    pub fn skeleton_count(&self) -> usize {
        self.list.skeleton_count()
    }

    pub async fn teardown(&self) {
        self.list.teardown().await;
    }
}
