//! In-memory partitioned log for testing and single-process scenarios.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use super::{AppendError, AppendReceipt, LogAppender};

/// A record stored in an [`InMemoryLog`] partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub partition: i32,
    pub offset: i64,
    pub key: Option<String>,
    pub payload: Vec<u8>,
}

impl LogRecord {
    /// Get the payload as a string (if valid UTF-8).
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

struct Topic {
    partitions: Vec<Vec<LogRecord>>,
    /// Next partition for unkeyed appends.
    next: usize,
}

impl Topic {
    fn new(partitions: usize) -> Self {
        Self {
            partitions: vec![Vec::new(); partitions],
            next: 0,
        }
    }

    fn choose_partition(&mut self, key: Option<&str>) -> usize {
        let count = self.partitions.len();
        match key {
            Some(key) => {
                let mut hasher = DefaultHasher::new();
                key.hash(&mut hasher);
                (hasher.finish() % count as u64) as usize
            }
            None => {
                let partition = self.next % count;
                self.next = self.next.wrapping_add(1);
                partition
            }
        }
    }
}

/// In-memory partitioned append-only log.
///
/// Features:
/// - Thread-safe (handles share one log via `Clone`)
/// - Topics are created on first append with the configured partition count
/// - Keyed appends hash to a fixed partition; unkeyed appends go round-robin
/// - Offsets are per partition and start at 0
///
/// ## Example
///
/// ```
/// use sourced_eventbus::bus::{InMemoryLog, LogAppender};
///
/// let log = InMemoryLog::with_partitions(3);
///
/// let first = log.append("HouseWasSold", Some("house-1"), b"{}").unwrap();
/// let second = log.append("HouseWasSold", Some("house-1"), b"{}").unwrap();
///
/// assert_eq!(first.partition, second.partition);
/// assert_eq!(second.offset, first.offset + 1);
/// assert_eq!(log.records("HouseWasSold").len(), 2);
/// ```
#[derive(Clone)]
pub struct InMemoryLog {
    topics: Arc<RwLock<HashMap<String, Topic>>>,
    partitions: usize,
}

impl Default for InMemoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLog {
    /// Create a log whose topics have a single partition.
    pub fn new() -> Self {
        Self::with_partitions(1)
    }

    /// Create a log whose topics have `partitions` partitions (at least one).
    pub fn with_partitions(partitions: usize) -> Self {
        Self {
            topics: Arc::new(RwLock::new(HashMap::new())),
            partitions: partitions.max(1),
        }
    }

    /// Partition count used for newly created topics.
    pub fn partition_count(&self) -> usize {
        self.partitions
    }

    /// All records of a topic, partition by partition, in offset order.
    pub fn records(&self, topic: &str) -> Vec<LogRecord> {
        self.read(|topics| {
            topics
                .get(topic)
                .map(|t| t.partitions.iter().flatten().cloned().collect())
                .unwrap_or_default()
        })
    }

    /// Records of a single partition in offset order.
    pub fn partition(&self, topic: &str, partition: i32) -> Vec<LogRecord> {
        self.read(|topics| {
            usize::try_from(partition)
                .ok()
                .and_then(|p| topics.get(topic)?.partitions.get(p).cloned())
                .unwrap_or_default()
        })
    }

    /// Names of all topics that have received at least one record, sorted.
    pub fn topics(&self) -> Vec<String> {
        let mut names = self.read(|topics| topics.keys().cloned().collect::<Vec<_>>());
        names.sort();
        names
    }

    /// Total number of records across all topics.
    pub fn len(&self) -> usize {
        self.read(|topics| {
            topics
                .values()
                .flat_map(|t| t.partitions.iter())
                .map(Vec::len)
                .sum()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock still holds consistent records: every write is a
    // single push, so readers recover the guard instead of failing.
    fn read<T>(&self, f: impl FnOnce(&HashMap<String, Topic>) -> T) -> T {
        match self.topics.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }
}

impl LogAppender for InMemoryLog {
    fn append(
        &self,
        destination: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<AppendReceipt, AppendError> {
        if destination.is_empty() {
            return Err(AppendError::Rejected("empty topic name".into()));
        }

        let mut topics = self
            .topics
            .write()
            .map_err(|_| AppendError::Other("in-memory log lock poisoned".into()))?;
        let topic = topics
            .entry(destination.to_string())
            .or_insert_with(|| Topic::new(self.partitions));

        let partition = topic.choose_partition(key);
        let records = &mut topic.partitions[partition];
        let receipt = AppendReceipt {
            partition: partition as i32,
            offset: records.len() as i64,
        };
        records.push(LogRecord {
            partition: receipt.partition,
            offset: receipt.offset,
            key: key.map(String::from),
            payload: payload.to_vec(),
        });

        Ok(receipt)
    }
}
