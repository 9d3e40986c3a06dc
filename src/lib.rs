pub mod bus;
mod committer;
mod dispatcher;
mod error;
mod event;
pub mod projection;
mod store;

pub use committer::{Committed, Committer, PartitionKey};
pub use dispatcher::Dispatcher;
pub use error::{Error, ErrorKind, HandlerError};
pub use event::{ArgValue, Args, Event};
pub use projection::{Handler, HandlerRegistry, ProjectionResult};
pub use store::{EventStore, EventStoreBuilder};

// Re-export the EventEmitter used for in-process result listeners
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
