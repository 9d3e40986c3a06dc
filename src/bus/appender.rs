//! The log-append interface consumed by the committer.

use std::sync::Arc;

use thiserror::Error;

/// Where the log stored an appended record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AppendReceipt {
    pub partition: i32,
    pub offset: i64,
}

/// Error type for append operations.
#[derive(Debug, Error)]
pub enum AppendError {
    /// Connection to the log failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    /// The log rejected the record
    #[error("record rejected: {0}")]
    Rejected(String),
    /// Timeout waiting for acknowledgment
    #[error("append timeout")]
    Timeout,
    /// Other error
    #[error("append error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AppendError {
    /// Failures worth retrying: the record may be accepted on a later attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppendError::ConnectionFailed(_) | AppendError::Timeout)
    }
}

/// Trait for appending records to a partitioned append-only log.
///
/// `destination` is the topic / stream name. When `key` is given, records
/// sharing a key are routed to the same partition and keep their relative
/// order; without a key, placement is up to the log.
///
/// Implementations might include:
/// - `InMemoryLog` - For testing and single-process scenarios
/// - A Kafka producer
/// - A NATS JetStream publisher
pub trait LogAppender: Send + Sync {
    fn append(
        &self,
        destination: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<AppendReceipt, AppendError>;
}

impl<T: LogAppender + ?Sized> LogAppender for &T {
    fn append(
        &self,
        destination: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<AppendReceipt, AppendError> {
        (**self).append(destination, key, payload)
    }
}

impl<T: LogAppender + ?Sized> LogAppender for Arc<T> {
    fn append(
        &self,
        destination: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<AppendReceipt, AppendError> {
        (**self).append(destination, key, payload)
    }
}

impl<T: LogAppender + ?Sized> LogAppender for Box<T> {
    fn append(
        &self,
        destination: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<AppendReceipt, AppendError> {
        (**self).append(destination, key, payload)
    }
}
