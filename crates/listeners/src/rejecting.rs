//! Removal listener that rejects notifications to simulate listener failure

use cacheprobe_core::{Error, ListenerResult, RemovalCause, RemovalListener, RemovalNotification};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::debug;

/// Removal listener that fails each notification while its toggle is on
///
/// Starts in the rejecting state. Every notification received while
/// rejecting increments the counter by exactly one and fails with
/// [`Error::Rejected`] carrying the full notification; while passive the
/// call is a complete no-op. Tests flip the toggle to simulate transient
/// versus permanent listener failure.
#[derive(Debug)]
pub struct RejectingListener<K, V> {
    reject: AtomicBool,
    rejected: AtomicUsize,
    _entry: PhantomData<fn(K, V)>,
}

impl<K, V> RejectingListener<K, V> {
    /// Create a listener in the rejecting state
    pub fn new() -> Self {
        Self {
            reject: AtomicBool::new(true),
            rejected: AtomicUsize::new(0),
            _entry: PhantomData,
        }
    }

    /// Whether the next notification will be rejected
    pub fn is_rejecting(&self) -> bool {
        self.reject.load(Ordering::Acquire)
    }

    /// Switch between the rejecting and passive states
    pub fn set_rejecting(&self, reject: bool) {
        self.reject.store(reject, Ordering::Release);
    }

    /// Number of notifications rejected so far
    pub fn rejected_count(&self) -> usize {
        self.rejected.load(Ordering::Acquire)
    }
}

impl<K, V> Default for RejectingListener<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RemovalListener<K, V> for RejectingListener<K, V> {
    fn on_removal(&self, key: K, value: V, cause: RemovalCause) -> ListenerResult<K, V> {
        if !self.is_rejecting() {
            return Ok(());
        }

        let rejected = self.rejected.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(cause = %cause, rejected, "rejecting removal notification");
        Err(Error::Rejected {
            notification: RemovalNotification::new(key, value, cause),
        })
    }
}

/// A removal listener that fails if a notification arrives
pub fn rejecting<K, V>() -> RejectingListener<K, V> {
    RejectingListener::new()
}
