//! Client-side ordering for item grids.

use ultraverse_market_model::Item;

/// Sort keys offered by the explore filter control.
///
/// Sorting is a pure, stable re-derivation over the already-fetched list;
/// switching keys never re-fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Fetch order, untouched.
    #[default]
    Default,
    PriceLowToHigh,
    PriceHighToLow,
    MostLiked,
    /// Soonest-ending first; items without an end time sort last.
    EndingSoon,
}

impl SortKey {
    /// Parse the filter-control value; anything unknown is `Default`.
    pub fn parse(value: &str) -> Self {
        match value {
            "price_low_to_high" => SortKey::PriceLowToHigh,
            "price_high_to_low" => SortKey::PriceHighToLow,
            "likes_high_to_low" => SortKey::MostLiked,
            "ending_soon" => SortKey::EndingSoon,
            _ => SortKey::Default,
        }
    }
}

/// Stable re-order of `items` under `key`. Missing prices compare as
/// zero, exactly like the price badge renders them.
pub fn sort_items(items: &[Item], key: SortKey) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::PriceLowToHigh => {
            sorted.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()));
        }
        SortKey::PriceHighToLow => {
            sorted.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()));
        }
        SortKey::MostLiked => {
            sorted.sort_by(|a, b| b.likes.cmp(&a.likes));
        }
        SortKey::EndingSoon => {
            sorted.sort_by(|a, b| end_rank(a).cmp(&end_rank(b)));
        }
    }
    sorted
}

fn end_rank(item: &Item) -> i64 {
    item.ends_at.unwrap_or(i64::MAX)
}
