//! Committer - serializes events and appends them to the log.

use crate::bus::{AppendReceipt, LogAppender};
use crate::error::Error;
use crate::event::{ArgValue, Event};

/// How the committer derives the partition key of an appended event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PartitionKey {
    /// No key; the log chooses the partition.
    #[default]
    None,
    /// Key by the event id.
    EventId,
    /// Key by the named argument, rendered as text. Events without a scalar
    /// value under that name go unkeyed.
    Arg(String),
}

impl PartitionKey {
    fn resolve(&self, event: &Event) -> Option<String> {
        match self {
            PartitionKey::None => None,
            PartitionKey::EventId => Some(event.id().to_string()),
            PartitionKey::Arg(name) => match event.args().get(name)? {
                value @ (ArgValue::String(_) | ArgValue::Number(_) | ArgValue::Bool(_)) => {
                    Some(value.to_string())
                }
                _ => None,
            },
        }
    }
}

/// An event that has been appended to the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committed {
    /// JSON wire form, as appended.
    pub payload: Vec<u8>,
    /// Topic the event was appended to (its projection name).
    pub destination: String,
    pub receipt: AppendReceipt,
}

impl Committed {
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

impl AsRef<[u8]> for Committed {
    fn as_ref(&self) -> &[u8] {
        &self.payload
    }
}

/// Appends serialized events to a log, one topic per projection.
///
/// The committer holds the log client but not its connection lifecycle; pass
/// a reference or an `Arc` to share one producer between committers.
pub struct Committer<L> {
    log: L,
    key: PartitionKey,
}

impl<L: LogAppender> Committer<L> {
    pub fn new(log: L) -> Self {
        Self {
            log,
            key: PartitionKey::None,
        }
    }

    /// Set the partition key strategy.
    pub fn with_partition_key(mut self, key: PartitionKey) -> Self {
        self.key = key;
        self
    }

    pub fn partition_key(&self) -> &PartitionKey {
        &self.key
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Serialize `event` and append it to the topic named by its projection.
    pub fn commit(&self, event: &Event) -> Result<Committed, Error> {
        let destination = event.projection();
        if destination.is_empty() {
            return Err(Error::EmptyProjection);
        }

        let payload = event.to_json()?;
        let key = self.key.resolve(event);

        let receipt = self
            .log
            .append(destination, key.as_deref(), &payload)
            .map_err(|source| {
                tracing::warn!(
                    event_id = event.id(),
                    destination,
                    error = %source,
                    "Failed to append event"
                );
                Error::Append {
                    destination: destination.to_string(),
                    source,
                }
            })?;

        tracing::info!(
            event_id = event.id(),
            destination,
            partition = receipt.partition,
            offset = receipt.offset,
            "Message sent"
        );

        Ok(Committed {
            payload,
            destination: destination.to_string(),
            receipt,
        })
    }
}
