//! Commands entering the feed, completions coming back, and the effects a
//! transition may request.

use reelfeed_model::{Item, ItemId};

use crate::error::CatalogError;

/// User and presentation intents forwarded to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedCommand {
    /// Fetch the page at the current cursor; absorbed while a fetch is in
    /// flight.
    RequestNextPage,
    /// Recover from the error flag; the only sanctioned path out of it.
    RetryLoad,
    /// Optimistically flip the like state of a loaded item.
    ToggleLike(ItemId),
    /// A cell reported how much of it is inside the viewport (0..=100).
    ObserveVisibility { id: ItemId, ratio: u8 },
}

/// Completion of a background repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The in-flight page fetch resolved.
    PageLoaded(Result<Vec<Item>, CatalogError>),
    /// An authoritative like toggle resolved.
    ToggleResolved {
        id: ItemId,
        result: Result<Item, CatalogError>,
    },
}

/// Side effect a transition asks the shell to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEffect {
    /// Fetch the given page from the repository.
    FetchPage(u32),
    /// Issue the authoritative like toggle for an already-applied local flip.
    PushToggle(ItemId),
}
