//! Capability contract invoked by the cache under test

use crate::cause::RemovalCause;
use crate::errors::ListenerResult;

/// Capability invoked by a cache once per completed removal
///
/// The cache owns the dispatch policy: when to invoke the listener, which
/// cause to report, and how to react if the invocation fails. Listener
/// implementations only observe; they never initiate action on their own.
/// Implementations must tolerate concurrent invocation from multiple
/// threads.
pub trait RemovalListener<K, V>: Send + Sync {
    /// Observe the removal of `key`/`value` for `cause`
    ///
    /// An `Err` signals a listener failure to the invoking eviction path;
    /// whether the cache surfaces or swallows it is the cache's policy.
    fn on_removal(&self, key: K, value: V, cause: RemovalCause) -> ListenerResult<K, V>;
}
