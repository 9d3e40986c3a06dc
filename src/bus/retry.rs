//! Retry/backoff decorator for log appenders.

use std::thread;
use std::time::Duration;

use super::{AppendError, AppendReceipt, LogAppender};

/// Backoff schedule for [`RetryingAppender`].
#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(2),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Retry immediately, without sleeping between attempts.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            multiplier: 1.0,
        }
    }

    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn with_max_backoff(mut self, backoff: Duration) -> Self {
        self.max_backoff = backoff;
        self
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let factor = self.multiplier.max(1.0).powi(exponent);
        let nanos = (self.initial_backoff.as_nanos() as f64 * factor).round();
        Duration::from_nanos(nanos as u64).min(self.max_backoff)
    }
}

/// A [`LogAppender`] that retries transient failures of the wrapped appender.
///
/// Only [`AppendError::is_transient`] failures are retried. Once attempts are
/// exhausted, the last error is returned unchanged.
///
/// ```
/// use sourced_eventbus::bus::{InMemoryLog, LogAppender, RetryPolicy, RetryingAppender};
///
/// let log = RetryingAppender::new(InMemoryLog::new(), RetryPolicy::default());
/// let receipt = log.append("HouseWasSold", None, b"{}").unwrap();
/// assert_eq!(receipt.offset, 0);
/// ```
pub struct RetryingAppender<L> {
    inner: L,
    policy: RetryPolicy,
}

impl<L> RetryingAppender<L> {
    pub fn new(inner: L, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: LogAppender> LogAppender for RetryingAppender<L> {
    fn append(
        &self,
        destination: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<AppendReceipt, AppendError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.inner.append(destination, key, payload) {
                Ok(receipt) => return Ok(receipt),
                Err(err) if err.is_transient() && attempt < max_attempts => {
                    let delay = self.policy.backoff(attempt);
                    tracing::warn!(
                        destination,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Append failed, retrying"
                    );
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
