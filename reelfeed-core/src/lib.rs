//! # Reelfeed Core
//!
//! Feed playback and pagination controller for a vertically-scrolling clip
//! feed: serialized page fetches with duplicate-request backpressure,
//! uniform fetch-failure recovery, exclusive playback selection from
//! visibility observations, and optimistic like toggles reconciled with
//! authoritative results.
//!
//! ## Architecture
//!
//! - [`catalog`]: the backend capability port and the simulated catalog
//!   used for development and tests
//! - [`repository`]: thin pass-through handle the controller fetches
//!   through
//! - [`feed`]: state, commands/events, pure transitions, and the async
//!   controller shell
//! - [`playback`]: the single-active-item visibility state machine
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use reelfeed_core::catalog::MockCatalog;
//! use reelfeed_core::feed::FeedController;
//! use reelfeed_core::repository::FeedRepository;
//!
//! # async fn run() {
//! let catalog = Arc::new(MockCatalog::new());
//! let mut feed = FeedController::new(FeedRepository::new(catalog));
//!
//! feed.request_next_page();
//! feed.settle().await;
//!
//! let first_id = feed.items().first().map(|item| item.id.clone());
//! if let Some(id) = first_id {
//!     feed.observe_visibility(&id, 100);
//!     assert_eq!(feed.active_item(), Some(&id));
//! }
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod catalog;
pub mod constants;
pub mod error;
pub mod feed;
pub mod playback;
pub mod repository;

pub use catalog::{CatalogSource, MockCatalog};
pub use error::{CatalogError, Result};
pub use feed::{FeedCommand, FeedController, FeedEffect, FeedEvent, FeedState};
pub use playback::PlaybackSelector;
pub use repository::FeedRepository;
