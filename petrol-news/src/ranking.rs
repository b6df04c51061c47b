use crate::types::Item;

/// Most recent first, capped at `pool_size`.
///
/// The sort is stable, so items with equal timestamps keep their collection order.
pub fn rank_and_truncate(mut items: Vec<Item>, pool_size: usize) -> Vec<Item> {
    items.sort_by(|a, b| b.published_sort.total_cmp(&a.published_sort));
    items.truncate(pool_size);
    items
}
