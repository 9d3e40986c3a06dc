//! EventStore integration tests: commit to a log, publish to projections.

mod support;
mod handlers;
mod round_trip;
mod failures;
mod concurrency;
mod retry;
