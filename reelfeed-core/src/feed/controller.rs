//! Async shell around the pure feed transitions.
//!
//! Owns the feed state, the playback selector, and the set of in-flight
//! repository calls. Commands are synchronous and never block; the caller
//! drives pending calls to completion with [`FeedController::next_event`]
//! (or [`FeedController::settle`]), which keeps every mutation on one
//! control context.

use std::fmt;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use reelfeed_model::{Item, ItemId};

use crate::playback::PlaybackSelector;
use crate::repository::FeedRepository;

use super::messages::{FeedCommand, FeedEffect, FeedEvent};
use super::state::FeedState;
use super::update;

/// The feed's pagination, error recovery, playback selection, and like
/// coordination behind one handle.
pub struct FeedController {
    state: FeedState,
    playback: PlaybackSelector,
    repository: FeedRepository,
    pending: FuturesUnordered<BoxFuture<'static, FeedEvent>>,
}

impl FeedController {
    pub fn new(repository: FeedRepository) -> Self {
        Self {
            state: FeedState::new(),
            playback: PlaybackSelector::new(),
            repository,
            pending: FuturesUnordered::new(),
        }
    }

    // Read-only observable state.

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.state.item(id)
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error
    }

    pub fn active_item(&self) -> Option<&ItemId> {
        self.playback.active_item()
    }

    /// Repository calls issued but not yet driven to completion.
    pub fn pending_calls(&self) -> usize {
        self.pending.len()
    }

    // Commands.

    /// Fetch the page at the current cursor; a no-op while one is in flight.
    pub fn request_next_page(&mut self) {
        self.dispatch(FeedCommand::RequestNextPage);
    }

    /// Clear the error flag and fetch again.
    pub fn retry_load(&mut self) {
        self.dispatch(FeedCommand::RetryLoad);
    }

    /// Optimistically flip the like state of a loaded item and push the
    /// authoritative toggle in the background.
    pub fn toggle_like(&mut self, id: ItemId) {
        self.dispatch(FeedCommand::ToggleLike(id));
    }

    /// Forward a visibility observation from the presentation layer.
    pub fn observe_visibility(&mut self, id: &ItemId, ratio: u8) {
        self.dispatch(FeedCommand::ObserveVisibility {
            id: id.clone(),
            ratio,
        });
    }

    fn dispatch(&mut self, command: FeedCommand) {
        if let Some(effect) =
            update::handle_command(&mut self.state, &mut self.playback, command)
        {
            self.push_effect(effect);
        }
    }

    fn push_effect(&mut self, effect: FeedEffect) {
        let repository = self.repository.clone();
        let call: BoxFuture<'static, FeedEvent> = match effect {
            FeedEffect::FetchPage(page) => Box::pin(async move {
                FeedEvent::PageLoaded(repository.fetch_page(page).await)
            }),
            FeedEffect::PushToggle(id) => Box::pin(async move {
                let result = repository.toggle_like(&id).await;
                FeedEvent::ToggleResolved { id, result }
            }),
        };
        self.pending.push(call);
    }

    /// Drive one pending repository call to completion and apply its result.
    ///
    /// Returns the applied event, or `None` when nothing is pending. Calls
    /// run to completion once issued; results referencing ids no longer in
    /// the loaded set are dropped at apply time.
    pub async fn next_event(&mut self) -> Option<FeedEvent> {
        let event = self.pending.next().await?;
        update::apply_event(&mut self.state, event.clone());
        Some(event)
    }

    /// Drain every pending repository call.
    pub async fn settle(&mut self) {
        while self.next_event().await.is_some() {}
    }
}

impl fmt::Debug for FeedController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedController")
            .field("state", &self.state)
            .field("playback", &self.playback)
            .field("repository", &self.repository)
            .field("pending", &self.pending.len())
            .finish()
    }
}
