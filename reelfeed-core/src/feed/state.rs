//! Feed state owned by the controller.

use reelfeed_model::{Item, ItemId};

/// Single-writer state behind the presentation-facing reads.
///
/// `items` grows by fetch arrival order and never holds duplicate ids:
/// pages are disjoint slices of the catalog and `next_page` only advances
/// after a page has been applied.
#[derive(Debug, Default)]
pub struct FeedState {
    /// Loaded items, insertion-ordered by fetch arrival.
    pub items: Vec<Item>,
    /// Cursor of the next page to request; advances only on success.
    pub next_page: u32,
    /// True while exactly one fetch is in flight.
    pub is_loading: bool,
    /// True after the most recent fetch failed, until a retry is issued.
    pub has_error: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of `id` in the loaded list, if present.
    pub fn item_index(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Loaded item with the given id, if present.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.item_index(id).map(|index| &self.items[index])
    }
}
