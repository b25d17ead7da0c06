//! Configuration options for the market client

use std::time::Duration;

use ultraverse_market_api::DEFAULT_BASE_URL;

/// Configuration options for the market client
///
/// Fallback assets live here, not in the normalizers: the renderer owns
/// its placeholder art and the SDK only threads it through.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the public marketplace API
    pub base_url: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Initial visible window of paginated grids
    pub page_size: usize,

    /// How much one "load more" click grows a paginated grid
    pub page_increment: usize,

    /// Window of the landing-page carousels
    pub carousel_limit: usize,

    /// Skeleton cards a carousel renders while loading
    pub carousel_skeleton_count: usize,

    /// Cap of the top-sellers ranking
    pub top_sellers_limit: usize,

    /// Local asset substituted for invalid or missing item images
    pub nft_image_fallback: String,

    /// Local asset substituted for invalid or missing avatars
    pub author_image_fallback: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            page_size: 8,
            page_increment: 4,
            carousel_limit: 6,
            carousel_skeleton_count: 4,
            top_sellers_limit: 12,
            nft_image_fallback: "images/nftImage.jpg".to_string(),
            author_image_fallback: "images/author_thumbnail.jpg".to_string(),
        }
    }
}

impl ClientOptions {
    /// Set the API base URL
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the initial visible window of paginated grids
    pub fn with_page_size(mut self, value: usize) -> Self {
        self.page_size = value;
        self
    }

    /// Set the "load more" increment of paginated grids
    pub fn with_page_increment(mut self, value: usize) -> Self {
        self.page_increment = value;
        self
    }

    /// Set the window of the landing-page carousels
    pub fn with_carousel_limit(mut self, value: usize) -> Self {
        self.carousel_limit = value;
        self
    }

    /// Set the skeleton count of the landing-page carousels
    pub fn with_carousel_skeleton_count(mut self, value: usize) -> Self {
        self.carousel_skeleton_count = value;
        self
    }

    /// Set the cap of the top-sellers ranking
    pub fn with_top_sellers_limit(mut self, value: usize) -> Self {
        self.top_sellers_limit = value;
        self
    }

    /// Set the fallback asset for item images
    pub fn with_nft_image_fallback(mut self, value: &str) -> Self {
        self.nft_image_fallback = value.to_string();
        self
    }

    /// Set the fallback asset for avatars
    pub fn with_author_image_fallback(mut self, value: &str) -> Self {
        self.author_image_fallback = value.to_string();
        self
    }
}
