//! Test logs for exercising commit failures.

use std::sync::Mutex;

use sourced_eventbus::bus::{AppendError, AppendReceipt, LogAppender};

/// A log whose broker is unreachable.
pub struct UnreachableLog;

impl LogAppender for UnreachableLog {
    fn append(
        &self,
        _destination: &str,
        _key: Option<&str>,
        _payload: &[u8],
    ) -> Result<AppendReceipt, AppendError> {
        Err(AppendError::ConnectionFailed("localhost:9092: connection refused".into()))
    }
}

/// Times out `failures` times, then accepts every append.
pub struct SlowStartLog {
    remaining_failures: Mutex<u32>,
    attempts: Mutex<u32>,
}

impl SlowStartLog {
    pub fn new(failures: u32) -> Self {
        Self {
            remaining_failures: Mutex::new(failures),
            attempts: Mutex::new(0),
        }
    }

    pub fn attempts(&self) -> u32 {
        *self.attempts.lock().unwrap()
    }
}

impl LogAppender for SlowStartLog {
    fn append(
        &self,
        _destination: &str,
        _key: Option<&str>,
        _payload: &[u8],
    ) -> Result<AppendReceipt, AppendError> {
        let mut attempts = self.attempts.lock().unwrap();
        *attempts += 1;

        let mut remaining = self.remaining_failures.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(AppendError::Timeout);
        }
        Ok(AppendReceipt {
            partition: 0,
            offset: i64::from(*attempts) - 1,
        })
    }
}
