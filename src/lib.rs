//! Ultraverse Market browse SDK
//!
//! A Rust client for the Ultraverse NFT marketplace's public read-only
//! API, pairing a resilient fetch layer with defensive payload
//! normalization and the view controllers behind every page of the
//! market front-end.

pub mod config;
pub mod error;

pub use ultraverse_market_api as api;
pub use ultraverse_market_model as model;
pub use ultraverse_market_view as view;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use api::ApiClient;
use view::{
    AuthorController, ExploreController, HotCollectionsController, ItemDetailsController,
    ListConfig, NewItemsController, TopSellersController,
};

/// The main entry point for the marketplace browse SDK
///
/// `Market` wires one shared HTTP client into the endpoint client and
/// hands out per-page view controllers configured from [`ClientOptions`].
pub struct Market {
    /// HTTP client shared by every sub-client
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
    api: ApiClient,
}

impl Market {
    /// Create a new client against the public marketplace API
    ///
    /// # Example
    ///
    /// ```
    /// use ultraverse_market::Market;
    ///
    /// let market = Market::new();
    /// let explore = market.explore();
    /// ```
    pub fn new() -> Self {
        let options = ClientOptions::default();
        let http_client = Client::new();
        let api = ApiClient::new(&options.base_url, http_client.clone());
        Self {
            http_client,
            options,
            api,
        }
    }

    /// Create a new client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use ultraverse_market::{config::ClientOptions, Market};
    ///
    /// let options = ClientOptions::default().with_page_size(12);
    /// let market = Market::with_options(options).unwrap();
    /// ```
    pub fn with_options(options: ClientOptions) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;
        let api = ApiClient::new(&options.base_url, http_client.clone());
        Ok(Self {
            http_client,
            options,
            api,
        })
    }

    /// The raw endpoint client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Controller for the explore grid
    pub fn explore(&self) -> ExploreController {
        ExploreController::new(self.api.clone(), self.grid_config("Failed to load."))
    }

    /// Controller for the new-items carousel
    pub fn new_items(&self) -> NewItemsController {
        NewItemsController::new(
            self.api.clone(),
            self.carousel_config("Could not load new items."),
        )
    }

    /// Controller for the hot-collections carousel
    pub fn hot_collections(&self) -> HotCollectionsController {
        HotCollectionsController::new(
            self.api.clone(),
            self.carousel_config("Could not load collections."),
        )
    }

    /// Controller for the top-sellers ranking
    pub fn top_sellers(&self) -> TopSellersController {
        TopSellersController::new(
            self.api.clone(),
            ListConfig::capped(self.options.top_sellers_limit)
                .with_error_message("Could not load top sellers."),
        )
    }

    /// Controller for an author profile page
    pub fn author(&self) -> AuthorController {
        AuthorController::new(
            self.api.clone(),
            self.grid_config("Could not load this author's items."),
        )
    }

    /// Controller for an item-details page
    pub fn item_details(&self) -> ItemDetailsController {
        ItemDetailsController::new(self.api.clone())
    }

    fn grid_config(&self, message: &str) -> ListConfig {
        ListConfig::paged(self.options.page_size, self.options.page_increment)
            .with_error_message(message)
    }

    fn carousel_config(&self, message: &str) -> ListConfig {
        ListConfig::capped(self.options.carousel_limit)
            .with_skeleton_count(self.options.carousel_skeleton_count)
            .with_error_message(message)
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::Market;
    pub use ultraverse_market_api::{ApiClient, ApiError, CancelToken};
    pub use ultraverse_market_model::{Author, Collection, Item, ItemDetail};
    pub use ultraverse_market_view::{CountdownState, SortKey, ViewState};
}
