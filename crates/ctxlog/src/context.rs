//! Context mappings attached to log records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ContextLogError;

/// A mapping of string keys to arbitrary JSON values, attached to every
/// record emitted through a [`ContextLogger`](crate::ContextLogger).
///
/// Contexts compose by shallow merge: [`merged`](Self::merged) overlays
/// another context on top of this one, with the overlay winning on key
/// collision. Values that are themselves objects are replaced wholesale,
/// never merged recursively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogContext {
    entries: Map<String, Value>,
}

impl LogContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any existing value for the key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert an entry, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether the context has an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Overlay `overrides` on top of this context.
    ///
    /// Shallow merge: a key present in `overrides` replaces this context's
    /// value wholesale, even when both values are objects. Keys present on
    /// only one side are kept as-is.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut entries = self.entries.clone();
        for (key, value) in &overrides.entries {
            entries.insert(key.clone(), value.clone());
        }
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a LogContext {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Map<String, Value>> for LogContext {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl TryFrom<Value> for LogContext {
    type Error = ContextLogError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(ContextLogError::InvalidContextError(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build a [`LogContext`] from literal key/value pairs.
///
/// Values may be anything convertible into a [`serde_json::Value`].
///
/// # Example
///
/// ```rust
/// use ctxlog::context;
///
/// let ctx = context! { "request_id" => "r-17", "attempt" => 2 };
/// assert_eq!(ctx.len(), 2);
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::LogContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::LogContext::new();
        $(ctx.insert($key, $value);)+
        ctx
    }};
}
