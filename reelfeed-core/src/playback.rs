//! Playback selection from visibility observations.
//!
//! Centralizes the single-active-item rule so views and update handlers can
//! stay simple: the selector reduces the stream of per-item visibility
//! ratios to at most one winner, and rendering only ever compares its own
//! item id against that winner. The selector never calls playback APIs.

use std::collections::HashMap;

use reelfeed_model::ItemId;

use crate::constants::ACTIVE_VISIBILITY_THRESHOLD;

/// Tracks which single item currently holds playback rights.
#[derive(Debug, Default)]
pub struct PlaybackSelector {
    /// Last reported visibility ratio per observed item.
    ratios: HashMap<ItemId, u8>,
    active: Option<ItemId>,
}

impl PlaybackSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility observation for `id`.
    ///
    /// `ratio` is the percentage of the item's render surface inside the
    /// viewport, clamped to 100. Crossing the threshold upward claims the
    /// active slot, displacing any previous holder; an active item dropping
    /// below the threshold releases the slot without handing it to anyone.
    pub fn observe(&mut self, id: &ItemId, ratio: u8) {
        let ratio = ratio.min(100);
        self.ratios.insert(id.clone(), ratio);

        if ratio >= ACTIVE_VISIBILITY_THRESHOLD {
            if self.active.as_ref() != Some(id) {
                self.active = Some(id.clone());
            }
        } else if self.active.as_ref() == Some(id) {
            self.active = None;
        }
    }

    /// Forget an item that left the loaded set, releasing the active slot if
    /// it held it.
    ///
    /// The feed itself never evicts loaded items; this is the hook for a
    /// host that prunes its set (a recycling presentation layer, or a
    /// future eviction pass).
    pub fn remove(&mut self, id: &ItemId) {
        self.ratios.remove(id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
    }

    /// The single item currently granted playback rights, if any.
    pub fn active_item(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn crossing_the_threshold_claims_playback() {
        let mut selector = PlaybackSelector::new();

        selector.observe(&id("a"), 49);
        assert_eq!(selector.active_item(), None);

        selector.observe(&id("a"), 50);
        assert_eq!(selector.active_item(), Some(&id("a")));
    }

    #[test]
    fn most_recent_qualifier_displaces_previous_holder() {
        let mut selector = PlaybackSelector::new();

        selector.observe(&id("a"), 80);
        selector.observe(&id("b"), 65);
        assert_eq!(selector.active_item(), Some(&id("b")));

        // A rapid scroll back: "a" re-qualifies and wins again.
        selector.observe(&id("a"), 90);
        assert_eq!(selector.active_item(), Some(&id("a")));
    }

    #[test]
    fn dropping_below_threshold_releases_without_reassigning() {
        let mut selector = PlaybackSelector::new();

        selector.observe(&id("a"), 100);
        selector.observe(&id("a"), 30);
        assert_eq!(selector.active_item(), None);
    }

    #[test]
    fn non_active_item_fading_out_does_not_touch_the_holder() {
        let mut selector = PlaybackSelector::new();

        selector.observe(&id("a"), 100);
        selector.observe(&id("b"), 20);
        assert_eq!(selector.active_item(), Some(&id("a")));
    }

    #[test]
    fn removal_of_active_item_clears_the_slot() {
        let mut selector = PlaybackSelector::new();

        selector.observe(&id("a"), 100);
        selector.remove(&id("a"));
        assert_eq!(selector.active_item(), None);

        // Removing a non-active item is a no-op for the slot.
        selector.observe(&id("b"), 100);
        selector.remove(&id("a"));
        assert_eq!(selector.active_item(), Some(&id("b")));
    }

    #[test]
    fn ratios_above_one_hundred_are_clamped() {
        let mut selector = PlaybackSelector::new();

        selector.observe(&id("a"), 250);
        assert_eq!(selector.active_item(), Some(&id("a")));
    }
}
