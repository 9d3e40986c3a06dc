//! Log bus - the append-only log events are committed to.
//!
//! The log transport itself (broker connections, partition assignment,
//! replication, acknowledgements) lives outside this crate. It is reached
//! through the [`LogAppender`] trait:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Committer                    │
//! │  append(destination, key?, payload)           │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │            LogAppender (trait)                │
//! └──────────────────────────────────────────────┘
//!        │                  │                  │
//!        ▼                  ▼                  ▼
//! ┌─────────────┐  ┌─────────────────┐  ┌─────────────┐
//! │ InMemoryLog │  │ RetryingAppender│  │ Kafka, NATS │
//! │ (included)  │  │  (decorator)    │  │ (external)  │
//! └─────────────┘  └─────────────────┘  └─────────────┘
//! ```

mod appender;
mod in_memory_log;
mod retry;

pub use appender::{AppendError, AppendReceipt, LogAppender};
pub use in_memory_log::{InMemoryLog, LogRecord};
pub use retry::{RetryPolicy, RetryingAppender};
