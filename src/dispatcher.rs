//! Dispatcher - decodes committed events and routes them to projections.

#[cfg(feature = "emitter")]
use std::sync::Mutex;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::error::Error;
use crate::event::Event;
use crate::projection::{HandlerRegistry, ProjectionResult};

/// Routes decoded events to the handler registered for their projection.
///
/// Each call invokes at most one handler, synchronously, with no retries.
/// With the `emitter` feature, successful results can also be emitted to
/// in-process listeners under the projection name:
///
/// ```
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use sourced_eventbus::{Dispatcher, Event, EventEmitter, HandlerRegistry};
///
/// let mut emitter = EventEmitter::new();
/// let (tx, rx) = mpsc::channel();
/// emitter.on("HouseWasSold", move |message: String| {
///     tx.send(message).unwrap();
/// });
///
/// let dispatcher = Dispatcher::new(HandlerRegistry::with_defaults()).with_emitter(emitter);
/// dispatcher.dispatch(&Event::new("HouseWasSold", [("price", 10.0)])).unwrap();
///
/// let message = rx.recv_timeout(Duration::from_secs(1)).unwrap();
/// assert_eq!(message, "House was sold for 10.00");
/// ```
pub struct Dispatcher {
    registry: HandlerRegistry,
    #[cfg(feature = "emitter")]
    emitter: Option<Mutex<EventEmitter>>,
}

impl Dispatcher {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry,
            #[cfg(feature = "emitter")]
            emitter: None,
        }
    }

    /// Emit each successful result's message to `emitter` listeners.
    #[cfg(feature = "emitter")]
    pub fn with_emitter(mut self, emitter: EventEmitter) -> Self {
        self.emitter = Some(Mutex::new(emitter));
        self
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Decode the JSON wire form of an event.
    pub fn decode(&self, encoded: &[u8]) -> Result<Event, Error> {
        Event::from_json(encoded)
    }

    /// Decode `encoded`, route it to its projection and return the result.
    pub fn publish(&self, encoded: &[u8]) -> Result<ProjectionResult, Error> {
        let event = self.decode(encoded)?;
        self.dispatch(&event)
    }

    /// Route an already decoded event to its projection.
    pub fn dispatch(&self, event: &Event) -> Result<ProjectionResult, Error> {
        let handler = self.registry.lookup(event.projection())?;

        let result = handler(event.args()).map_err(|source| Error::Handler {
            projection: event.projection().to_string(),
            source,
        })?;

        tracing::info!(
            event_id = event.id(),
            projection = event.projection(),
            message = %result.message,
            "Projection handled event"
        );

        #[cfg(feature = "emitter")]
        self.emit(event.projection(), &result);

        Ok(result)
    }

    #[cfg(feature = "emitter")]
    fn emit(&self, projection: &str, result: &ProjectionResult) {
        let Some(emitter) = &self.emitter else {
            return;
        };
        match emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(projection, result.message.clone());
            }
            Err(_) => {
                tracing::warn!(projection, "Result emitter lock poisoned, skipping emit");
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(HandlerRegistry::with_defaults())
    }
}
