//! The argument bag carried by an [`Event`](super::Event).

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::ArgValue;
use crate::error::HandlerError;

/// Unordered mapping from argument names to [`ArgValue`]s.
///
/// Stored sorted so serialization is deterministic. Typed accessors fail with
/// [`HandlerError::InvalidArgument`] when a key is missing or holds another
/// variant, which lets handlers propagate with `?`:
///
/// ```
/// use sourced_eventbus::{Args, HandlerError};
///
/// let args = Args::from([("price", 300000.0)]);
/// assert_eq!(args.number("price").unwrap(), 300000.0);
/// assert!(matches!(args.string("price"), Err(HandlerError::InvalidArgument(_))));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(BTreeMap<String, ArgValue>);

impl Args {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add an argument, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ArgValue> {
        self.0.iter()
    }

    /// Numeric argument. Strings holding digits are not coerced.
    pub fn number(&self, key: &str) -> Result<f64, HandlerError> {
        self.typed(key, ArgValue::as_f64)
    }

    pub fn string(&self, key: &str) -> Result<&str, HandlerError> {
        self.typed(key, ArgValue::as_str)
    }

    pub fn boolean(&self, key: &str) -> Result<bool, HandlerError> {
        self.typed(key, ArgValue::as_bool)
    }

    pub fn list(&self, key: &str) -> Result<&[ArgValue], HandlerError> {
        self.typed(key, ArgValue::as_list)
    }

    pub fn map(&self, key: &str) -> Result<&BTreeMap<String, ArgValue>, HandlerError> {
        self.typed(key, ArgValue::as_map)
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        extract: impl FnOnce(&'a ArgValue) -> Option<T>,
    ) -> Result<T, HandlerError> {
        self.0
            .get(key)
            .and_then(extract)
            .ok_or_else(|| HandlerError::InvalidArgument(format!("{} not provided or invalid", key)))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Args
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, ArgValue>> for Args {
    fn from(map: BTreeMap<String, ArgValue>) -> Self {
        Self(map)
    }
}

impl From<Args> for ArgValue {
    fn from(args: Args) -> Self {
        ArgValue::Map(args.0)
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = (&'a String, &'a ArgValue);
    type IntoIter = btree_map::Iter<'a, String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
