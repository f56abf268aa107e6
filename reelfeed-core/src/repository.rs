//! Thin repository adapting the catalog port for the feed controller.

use std::fmt;
use std::sync::Arc;

use reelfeed_model::{Item, ItemId};

use crate::catalog::CatalogSource;
use crate::error::Result;

/// Pass-through over the injected catalog backend.
///
/// Adds no logic of its own; it exists so the controller depends on one
/// cheaply cloneable handle instead of the raw trait object.
#[derive(Clone)]
pub struct FeedRepository {
    source: Arc<dyn CatalogSource>,
}

impl FeedRepository {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_page(&self, page: u32) -> Result<Vec<Item>> {
        self.source.fetch_page(page).await
    }

    pub async fn toggle_like(&self, id: &ItemId) -> Result<Item> {
        self.source.toggle_like(id).await
    }
}

impl fmt::Debug for FeedRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedRepository")
            .field("source", &"CatalogSource")
            .finish()
    }
}
