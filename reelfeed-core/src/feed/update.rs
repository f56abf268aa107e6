//! Pure feed transitions.
//!
//! Every command and completion goes through these functions, so the whole
//! state machine is unit-testable without a runtime or a backend. The async
//! shell in [`super::controller`] only executes the returned effects.

use tracing::{debug, info, warn};

use crate::constants::LOOKAHEAD_DISTANCE;
use crate::playback::PlaybackSelector;

use super::messages::{FeedCommand, FeedEffect, FeedEvent};
use super::state::FeedState;

/// Apply a presentation command, returning the effect to run, if any.
pub fn handle_command(
    state: &mut FeedState,
    playback: &mut PlaybackSelector,
    command: FeedCommand,
) -> Option<FeedEffect> {
    match command {
        FeedCommand::RequestNextPage => begin_fetch(state),

        FeedCommand::RetryLoad => {
            // Clear the flag before the call so the error affordance
            // disappears immediately; a repeated failure re-sets it.
            state.has_error = false;
            begin_fetch(state)
        }

        FeedCommand::ToggleLike(id) => match state.item_index(&id) {
            Some(index) => {
                state.items[index].toggle_like();
                Some(FeedEffect::PushToggle(id))
            }
            None => {
                // Stale UI reference; not an error.
                debug!(%id, "like toggle for id outside the loaded set, ignoring");
                None
            }
        },

        FeedCommand::ObserveVisibility { id, ratio } => {
            // Only loaded items may claim playback: a stale report must
            // never leave the active slot pointing outside the loaded set.
            let Some(position) = state.item_index(&id) else {
                debug!(%id, "visibility report for id outside the loaded set, ignoring");
                return None;
            };
            playback.observe(&id, ratio);
            match lookahead_index(state) {
                Some(threshold) if ratio > 0 && position == threshold => {
                    begin_fetch(state)
                }
                _ => None,
            }
        }
    }
}

/// Apply a completion event from a resolved repository call.
pub fn apply_event(state: &mut FeedState, event: FeedEvent) {
    match event {
        FeedEvent::PageLoaded(Ok(batch)) => {
            state.is_loading = false;
            state.has_error = false;
            if batch.is_empty() {
                debug!(page = state.next_page, "reached end of catalog");
            } else {
                info!(
                    page = state.next_page,
                    count = batch.len(),
                    "applied fetched page"
                );
            }
            state.items.extend(batch);
            state.next_page += 1;
        }

        FeedEvent::PageLoaded(Err(error)) => {
            state.is_loading = false;
            state.has_error = true;
            warn!(page = state.next_page, %error, "page fetch failed");
        }

        FeedEvent::ToggleResolved {
            id,
            result: Ok(authoritative),
        } => {
            let Some(index) = state.item_index(&id) else {
                debug!(%id, "toggle resolved for id outside the loaded set, dropping");
                return;
            };
            let local = &mut state.items[index];
            if !local.engagement_matches(&authoritative) {
                // A concurrent toggle landed server-side; the authoritative
                // response wins.
                debug!(%id, "authoritative toggle disagrees with local state, adopting");
                local.adopt_engagement(&authoritative);
            }
        }

        FeedEvent::ToggleResolved {
            id,
            result: Err(error),
        } => {
            // Deliberate policy: the optimistic flip stays in place.
            warn!(%id, %error, "authoritative like toggle failed");
        }
    }
}

fn begin_fetch(state: &mut FeedState) -> Option<FeedEffect> {
    if state.is_loading {
        debug!(
            page = state.next_page,
            "fetch already in flight, absorbing request"
        );
        return None;
    }
    state.is_loading = true;
    Some(FeedEffect::FetchPage(state.next_page))
}

/// Position whose visibility triggers prefetching the next page.
fn lookahead_index(state: &FeedState) -> Option<usize> {
    state.items.len().checked_sub(LOOKAHEAD_DISTANCE)
}
