use thiserror::Error;

use crate::bus::AppendError;

/// Error returned by a projection handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// A required argument is missing or holds the wrong type.
    #[error("{0}")]
    InvalidArgument(String),
    /// The handler could not compute a result for valid arguments.
    #[error("handler failed: {0}")]
    Failed(String),
}

/// Error returned by [`EventStore`](crate::EventStore) operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("projection name must not be empty")]
    EmptyProjection,
    #[error("handler does not exist: {0}")]
    NotFound(String),
    #[error("error decoding event: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("error encoding event: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("argument {0} is not a finite number")]
    NonFiniteNumber(String),
    #[error("projection {projection} failed: {source}")]
    Handler {
        projection: String,
        #[source]
        source: HandlerError,
    },
    #[error("error appending event to {destination}: {source}")]
    Append {
        destination: String,
        #[source]
        source: AppendError,
    },
}

/// Coarse classification of an [`Error`], for callers deciding whether to
/// retry, drop or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Decode,
    Encode,
    Append,
    Handler,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyProjection | Error::NonFiniteNumber(_) => ErrorKind::InvalidArgument,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Encode(_) => ErrorKind::Encode,
            Error::Handler {
                source: HandlerError::InvalidArgument(_),
                ..
            } => ErrorKind::InvalidArgument,
            Error::Handler { .. } => ErrorKind::Handler,
            Error::Append { .. } => ErrorKind::Append,
        }
    }

    /// True when repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Append { source, .. } if source.is_transient())
    }
}
