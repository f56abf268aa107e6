//! Simulated catalog backend.
//!
//! Reproduces the behavior of the upstream mock service: fixed-size pages
//! served from a canonical in-memory list, one simulated time unit of fetch
//! latency, and a deterministic outage on every third fetch of the session.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reelfeed_model::{Item, ItemId};

use crate::constants::{FAILURE_CADENCE, PAGE_SIZE, SIMULATED_FETCH_LATENCY};
use crate::error::{CatalogError, Result};

use super::port::CatalogSource;

const SEED_CATALOG: &str = include_str!("../../data/seed_catalog.json");

/// Canonical state behind the simulated backend.
///
/// The fetch counter lives here, scoped to the instance, so parallel tests
/// each get their own failure cadence instead of sharing a process-wide one.
#[derive(Debug)]
struct CatalogInner {
    items: Vec<Item>,
    fetch_calls: u64,
}

/// In-memory catalog with deterministic failure injection.
#[derive(Debug)]
pub struct MockCatalog {
    inner: Mutex<CatalogInner>,
    latency: Duration,
}

impl MockCatalog {
    /// Catalog seeded from the embedded clip list.
    ///
    /// The embedded data is part of the build; failing to decode it is a
    /// build defect and aborts session start loudly.
    pub fn new() -> Self {
        let items: Vec<Item> = serde_json::from_str(SEED_CATALOG)
            .expect("embedded seed catalog must decode");
        Self::with_items(items)
    }

    /// Catalog over a caller-provided item list.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            inner: Mutex::new(CatalogInner {
                items,
                fetch_calls: 0,
            }),
            latency: SIMULATED_FETCH_LATENCY,
        }
    }

    /// Override the simulated fetch latency (tests usually want zero).
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of fetch calls served so far this session.
    pub fn fetch_calls(&self) -> u64 {
        self.inner.lock().fetch_calls
    }

    /// Read the canonical copy of an item, if it exists.
    pub fn canonical_item(&self, id: &ItemId) -> Option<Item> {
        self.inner
            .lock()
            .items
            .iter()
            .find(|item| &item.id == id)
            .cloned()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Item>> {
        tokio::time::sleep(self.latency).await;

        let mut inner = self.inner.lock();
        inner.fetch_calls += 1;

        // Deterministic outage on every third fetch of the session.
        if inner.fetch_calls % FAILURE_CADENCE == 0 {
            return Err(CatalogError::FetchFailed(format!(
                "simulated outage on request {}",
                inner.fetch_calls
            )));
        }

        let start = page as usize * PAGE_SIZE;
        if start >= inner.items.len() {
            return Ok(Vec::new());
        }
        let end = (start + PAGE_SIZE).min(inner.items.len());
        Ok(inner.items[start..end].to_vec())
    }

    async fn toggle_like(&self, id: &ItemId) -> Result<Item> {
        let mut inner = self.inner.lock();
        let item = inner
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| CatalogError::ItemNotFound(id.clone()))?;
        item.toggle_like();
        Ok(item.clone())
    }
}
