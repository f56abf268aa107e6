use async_trait::async_trait;
use reelfeed_model::{Item, ItemId};

use crate::error::Result;

/// Capability port over a clip catalog backend.
///
/// The feed controller only depends on this contract, so the simulated
/// catalog and a production backend are interchangeable at construction
/// time. Implementations own their storage format; the controller only
/// cares about latency and failure behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the fixed-size page at `page`, empty once the catalog is
    /// exhausted.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Item>>;

    /// Flip the canonical like state for `id` and return the updated item.
    async fn toggle_like(&self, id: &ItemId) -> Result<Item>;
}
