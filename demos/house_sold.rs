//! End-to-end flow: commit a `HouseWasSold` event to an in-memory log, then
//! publish the committed bytes to its projection.
//!
//! Run with `RUST_LOG=info cargo run --example house_sold`.

use sourced_eventbus::bus::{InMemoryLog, RetryPolicy, RetryingAppender};
use sourced_eventbus::{Event, EventStore};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), sourced_eventbus::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let log = InMemoryLog::with_partitions(3);
    let store = EventStore::new(RetryingAppender::new(log.clone(), RetryPolicy::default()));

    let event = Event::new("HouseWasSold", [("price", 100.00)]);
    let committed = store.commit(&event)?;
    tracing::info!(
        partition = committed.receipt.partition,
        offset = committed.receipt.offset,
        "Committed {}",
        event.id()
    );

    let result = store.publish(&committed.payload)?;
    tracing::info!(records = log.len(), "{}", result);

    Ok(())
}
