//! Controllers behind the landing-page sections.

use ultraverse_market_api::ApiClient;
use ultraverse_market_model::{
    normalize_author, normalize_collection, normalize_item, Author, Collection, Item,
};

use crate::list::{ListConfig, ListController};
use crate::state::ViewState;

/// New-items carousel.
#[derive(Clone)]
pub struct NewItemsController {
    api: ApiClient,
    list: ListController<Item>,
}

impl NewItemsController {
    pub fn new(api: ApiClient, config: ListConfig) -> Self {
        Self {
            api,
            list: ListController::new(config),
        }
    }

    pub async fn refresh(&self) {
        let api = self.api.clone();
        self.list
            .refresh(|cancel| async move {
                let raw = api.new_items(&cancel).await?;
                Ok(raw
                    .iter()
                    .enumerate()
                    .map(|(index, record)| normalize_item(record, index))
                    .collect())
            })
            .await;
    }

    pub async fn state(&self) -> ViewState<Vec<Item>> {
        self.list.state().await
    }

    pub async fn visible_items(&self) -> Vec<Item> {
        self.list.visible_items().await
    }

    pub fn skeleton_count(&self) -> usize {
        self.list.skeleton_count()
    }

    pub async fn teardown(&self) {
        self.list.teardown().await;
    }
}

/// Hot-collections carousel.
#[derive(Clone)]
pub struct HotCollectionsController {
    api: ApiClient,
    list: ListController<Collection>,
}

impl HotCollectionsController {
    pub fn new(api: ApiClient, config: ListConfig) -> Self {
        Self {
            api,
            list: ListController::new(config),
        }
    }

    pub async fn refresh(&self) {
        let api = self.api.clone();
        self.list
            .refresh(|cancel| async move {
                let raw = api.hot_collections(&cancel).await?;
                Ok(raw
                    .iter()
                    .enumerate()
                    .map(|(index, record)| normalize_collection(record, index))
                    .collect())
            })
            .await;
    }

    pub async fn state(&self) -> ViewState<Vec<Collection>> {
        self.list.state().await
    }

    pub async fn visible_items(&self) -> Vec<Collection> {
        self.list.visible_items().await
    }

    pub fn skeleton_count(&self) -> usize {
        self.list.skeleton_count()
    }

    pub async fn teardown(&self) {
        self.list.teardown().await;
    }
}

/// Top-sellers ranking.
///
/// Sellers are normalized without an id fallback: a record with no usable
/// author id renders as a non-navigable card rather than linking to a
/// broken profile route.
#[derive(Clone)]
pub struct TopSellersController {
    api: ApiClient,
    list: ListController<Author>,
}

impl TopSellersController {
    pub fn new(api: ApiClient, config: ListConfig) -> Self {
        Self {
            api,
            list: ListController::new(config),
        }
    }

    pub async fn refresh(&self) {
        let api = self.api.clone();
        self.list
            .refresh(|cancel| async move {
                let raw = api.top_sellers(&cancel).await?;
                Ok(raw
                    .iter()
                    .map(|record| normalize_author(record, None))
                    .collect())
            })
            .await;
    }

    pub async fn state(&self) -> ViewState<Vec<Author>> {
        self.list.state().await
    }

    pub async fn visible_items(&self) -> Vec<Author> {
        self.list.visible_items().await
    }

    pub fn skeleton_count(&self) -> usize {
        self.list.skeleton_count()
    }

    pub async fn teardown(&self) {
        self.list.teardown().await;
    }
}
