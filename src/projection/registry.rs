//! HandlerRegistry - projection name to handler mapping.

use std::collections::HashMap;
use std::fmt;

use super::{house_was_sold, ProjectionResult};
use crate::error::{Error, HandlerError};
use crate::event::Args;

/// A projection handler.
pub type Handler = Box<dyn Fn(&Args) -> Result<ProjectionResult, HandlerError> + Send + Sync>;

/// Maps projection names to handlers.
///
/// Built once with chained [`projection`](HandlerRegistry::projection) calls
/// and read-only afterwards, so a shared reference can be used from any
/// number of threads.
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in projections (`HouseWasSold`).
    pub fn with_defaults() -> Self {
        crate::register_projections!(Self::new(), house_was_sold)
    }

    /// Register a handler under `name`.
    ///
    /// Uses builder pattern, returns `self` for chaining. Registering a name
    /// twice replaces the earlier handler.
    pub fn projection<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Args) -> Result<ProjectionResult, HandlerError> + Send + Sync + 'static,
    {
        self.insert(name.into(), Box::new(handler));
        self
    }

    /// Look up the handler for a projection. Exact, case-sensitive match.
    pub fn lookup(&self, projection: &str) -> Result<&Handler, Error> {
        self.handlers
            .get(projection)
            .ok_or_else(|| Error::NotFound(projection.to_string()))
    }

    pub fn contains(&self, projection: &str) -> bool {
        self.handlers.contains_key(projection)
    }

    /// List registered projection names, sorted.
    pub fn projections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn insert(&mut self, name: String, handler: Handler) {
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::warn!(projection = %name, "Replaced existing projection handler");
        }
    }
}

impl Default for HandlerRegistry {
    /// The built-in projections, same as [`HandlerRegistry::with_defaults`].
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<N: Into<String>> FromIterator<(N, Handler)> for HandlerRegistry {
    fn from_iter<I: IntoIterator<Item = (N, Handler)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, handler) in iter {
            registry.insert(name.into(), handler);
        }
        registry
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("projections", &self.projections())
            .finish()
    }
}
