//! EventStore - commit events to the log and publish them to projections.

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::bus::LogAppender;
use crate::committer::{Committed, Committer, PartitionKey};
use crate::dispatcher::Dispatcher;
use crate::error::Error;
use crate::event::Event;
use crate::projection::{HandlerRegistry, ProjectionResult};

/// Composition root owning one [`Dispatcher`] and one [`Committer`].
///
/// ## Example
///
/// ```
/// use sourced_eventbus::bus::InMemoryLog;
/// use sourced_eventbus::{Event, EventStore};
///
/// let log = InMemoryLog::new();
/// let store = EventStore::new(log.clone());
///
/// let committed = store.commit(&Event::new("HouseWasSold", [("price", 100000.0)])).unwrap();
/// let result = store.publish(&committed.payload).unwrap();
///
/// assert_eq!(result.message, "House was sold for 100000.00");
/// assert_eq!(log.records("HouseWasSold").len(), 1);
/// ```
pub struct EventStore<L> {
    dispatcher: Dispatcher,
    committer: Committer<L>,
}

impl<L: LogAppender> EventStore<L> {
    /// Create a store over `log` with the built-in projections.
    pub fn new(log: L) -> Self {
        Self::builder(log).build()
    }

    /// Start configuring a store over `log`.
    pub fn builder(log: L) -> EventStoreBuilder<L> {
        EventStoreBuilder {
            log,
            registry: None,
            partition_key: PartitionKey::None,
            #[cfg(feature = "emitter")]
            emitter: None,
        }
    }

    /// Serialize `event` and append it to the log.
    pub fn commit(&self, event: &Event) -> Result<Committed, Error> {
        self.committer.commit(event)
    }

    /// Decode a committed event and route it to its projection.
    pub fn publish(&self, encoded: &[u8]) -> Result<ProjectionResult, Error> {
        self.dispatcher.publish(encoded)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn committer(&self) -> &Committer<L> {
        &self.committer
    }
}

/// Builder for [`EventStore`].
pub struct EventStoreBuilder<L> {
    log: L,
    registry: Option<HandlerRegistry>,
    partition_key: PartitionKey,
    #[cfg(feature = "emitter")]
    emitter: Option<EventEmitter>,
}

impl<L: LogAppender> EventStoreBuilder<L> {
    /// Use `registry` instead of the built-in projections.
    pub fn registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn partition_key(mut self, key: PartitionKey) -> Self {
        self.partition_key = key;
        self
    }

    /// Emit projection results to in-process listeners.
    #[cfg(feature = "emitter")]
    pub fn emitter(mut self, emitter: EventEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn build(self) -> EventStore<L> {
        let registry = self.registry.unwrap_or_else(HandlerRegistry::with_defaults);

        #[allow(unused_mut)]
        let mut dispatcher = Dispatcher::new(registry);
        #[cfg(feature = "emitter")]
        if let Some(emitter) = self.emitter {
            dispatcher = dispatcher.with_emitter(emitter);
        }

        EventStore {
            dispatcher,
            committer: Committer::new(self.log).with_partition_key(self.partition_key),
        }
    }
}
