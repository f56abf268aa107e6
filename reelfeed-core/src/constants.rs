//! Fixed tuning values shared across the feed core.

use std::time::Duration;

/// Number of items in every catalog page.
pub const PAGE_SIZE: usize = 20;

/// Distance from the end of the loaded list at which the next page is
/// prefetched: observing the item 5 slots from the end triggers the fetch.
pub const LOOKAHEAD_DISTANCE: usize = 5;

/// Visibility percentage at or above which an item claims playback.
pub const ACTIVE_VISIBILITY_THRESHOLD: u8 = 50;

/// Latency the mock catalog simulates per page fetch.
pub const SIMULATED_FETCH_LATENCY: Duration = Duration::from_secs(1);

/// Cadence of the mock catalog's injected failures: every Nth fetch fails.
pub const FAILURE_CADENCE: u64 = 3;
