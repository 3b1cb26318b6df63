//! Immutable record of one observed removal event

use crate::cause::RemovalCause;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One removal event observed by a listener
///
/// Constructed exactly once per removal, at the moment the listener is
/// invoked, and never mutated afterwards. Equality covers all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalNotification<K, V> {
    key: K,
    value: V,
    cause: RemovalCause,
}

impl<K, V> RemovalNotification<K, V> {
    /// Record a removal of `key`/`value` for `cause`
    pub fn new(key: K, value: V, cause: RemovalCause) -> Self {
        Self { key, value, cause }
    }

    /// The key of the removed entry
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value of the removed entry
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Why the entry was removed
    pub fn cause(&self) -> RemovalCause {
        self.cause
    }

    /// Decompose into the recorded key, value, and cause
    pub fn into_parts(self) -> (K, V, RemovalCause) {
        (self.key, self.value, self.cause)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for RemovalNotification<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
