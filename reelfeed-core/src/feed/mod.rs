//! Pagination and fetch control for the feed.
//!
//! Split in the usual shape: plain state in [`state`], commands/events in
//! [`messages`], pure transitions in [`update`], and the async shell that
//! drives repository calls in [`controller`].

pub mod controller;
pub mod messages;
pub mod state;
pub mod update;

pub use controller::FeedController;
pub use messages::{FeedCommand, FeedEffect, FeedEvent};
pub use state::FeedState;
