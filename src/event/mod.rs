//! Domain events as committed to, and decoded from, the log.
//!
//! The wire form is a JSON object with exactly three fields:
//!
//! ```text
//! {"id":"5f0c…","projection":"HouseWasSold","args":{"price":300000.0}}
//! ```

mod args;
mod value;

pub use args::Args;
pub use value::ArgValue;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// An immutable record of a domain fact.
///
/// `projection` names both the handler that interprets the event and the log
/// destination it is appended to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    projection: String,
    args: Args,
}

impl Event {
    /// Create an event with a fresh random id.
    ///
    /// `projection` is expected to be non-empty; use [`Event::try_new`] to
    /// have that checked.
    pub fn new(projection: impl Into<String>, args: impl Into<Args>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), projection, args)
    }

    /// Like [`Event::new`], but rejects an empty projection name.
    pub fn try_new(projection: impl Into<String>, args: impl Into<Args>) -> Result<Self, Error> {
        let projection = projection.into();
        if projection.is_empty() {
            return Err(Error::EmptyProjection);
        }
        Ok(Self::new(projection, args))
    }

    /// Create an event with a caller-supplied id.
    pub fn with_id(
        id: impl Into<String>,
        projection: impl Into<String>,
        args: impl Into<Args>,
    ) -> Self {
        Self {
            id: id.into(),
            projection: projection.into(),
            args: args.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn projection(&self) -> &str {
        &self.projection
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Serialize to the JSON wire form.
    ///
    /// NaN and infinite numbers have no JSON form and fail with
    /// [`Error::NonFiniteNumber`] naming the top-level argument.
    pub fn to_json(&self) -> Result<Vec<u8>, Error> {
        if let Some((key, _)) = self.args.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::NonFiniteNumber(key.clone()));
        }
        serde_json::to_vec(self).map_err(Error::Encode)
    }

    /// Decode from the JSON wire form.
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(bytes).map_err(Error::Decode)
    }
}
