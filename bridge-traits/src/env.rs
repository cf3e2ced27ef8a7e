//! Configuration Source Abstraction
//!
//! Environment-style key/value lookup. The core never reads `std::env`
//! directly so that resolution logic can be driven from tests or from a
//! host that keeps its configuration elsewhere.

use std::collections::HashMap;

/// Key/value configuration lookup.
///
/// Values that are present but empty are treated as unset by
/// [`ConfigSource::get_non_empty`], which is what the core uses.
pub trait ConfigSource: Send + Sync {
    /// Raw lookup. `None` when the key is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Lookup that also treats an empty string as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// `true` when the key is set to a non-empty value.
    fn is_set(&self, key: &str) -> bool {
        self.get_non_empty(key).is_some()
    }
}

/// Process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory configuration, mostly for tests and embedded hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    values: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
