//! Ultraverse Market view controllers
//!
//! The reusable fetch-lifecycle state machines behind every page of the
//! marketplace front-end: list grids with sort and load-more pagination,
//! detail views that merge navigation state with authoritative fetches,
//! and the auction countdown. Controllers own their state exclusively;
//! every load cancels its predecessor and a generation check keeps stale
//! responses from ever being committed.

mod author;
mod countdown;
mod explore;
mod home;
mod item_details;
mod lifecycle;
mod list;
mod sort;
mod state;

pub use author::AuthorController;
pub use countdown::{format_remaining, remaining_millis, state_at, Countdown, CountdownState};
pub use explore::ExploreController;
pub use home::{HotCollectionsController, NewItemsController, TopSellersController};
pub use item_details::ItemDetailsController;
pub use list::{ListConfig, ListController};
pub use sort::{sort_items, SortKey};
pub use state::ViewState;
