//! Core data model definitions shared across Reelfeed crates.
#![allow(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod creator;
pub mod ids;
pub mod item;

// Intentionally curated re-exports for downstream consumers.
pub use creator::Creator;
pub use ids::{CreatorId, ItemId};
pub use item::{Item, MediaRenditions};
