//! Scripted feed session against the simulated catalog.
//!
//! Walks the whole catalog the way a user would: scrolls cell by cell,
//! likes a couple of clips on the way, and retries through the injected
//! outages. Useful for eyeballing controller behavior with `RUST_LOG=debug`.

use std::sync::Arc;
use std::time::Duration;

use reelfeed_core::catalog::MockCatalog;
use reelfeed_core::feed::FeedController;
use reelfeed_core::repository::FeedRepository;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelfeed_demo=info,reelfeed_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Keep the simulated latency short enough to watch comfortably.
    let catalog = Arc::new(MockCatalog::new().latency(Duration::from_millis(150)));
    let mut feed = FeedController::new(FeedRepository::new(catalog));

    feed.request_next_page();
    feed.settle().await;
    info!(loaded = feed.items().len(), "initial page ready");

    let mut position = 0;
    while position < feed.items().len() {
        let id = feed.items()[position].id.clone();

        // The presentation layer would report this as the cell snaps into
        // place; full visibility claims playback and may prefetch.
        feed.observe_visibility(&id, 100);
        if let Some(active) = feed.active_item() {
            info!(%active, position, "now playing");
        }

        // Like every ninth clip on the way down.
        if position % 9 == 3 {
            feed.toggle_like(id.clone());
            if let Some(item) = feed.item(&id) {
                info!(%id, likes = item.like_count, "liked");
            }
        }

        feed.settle().await;
        if feed.has_error() {
            warn!("fetch failed, retrying");
            feed.retry_load();
            feed.settle().await;
        }

        position += 1;
    }

    info!(total = feed.items().len(), "reached the end of the catalog");
    Ok(())
}
