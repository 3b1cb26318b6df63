//! Removal listener that stores every notification for inspection

use cacheprobe_core::{ListenerResult, RemovalCause, RemovalListener, RemovalNotification};
use parking_lot::Mutex;
use tracing::trace;

/// Removal listener that records the notifications it receives
///
/// Appends every notification to an internal log in arrival order, with no
/// filtering or deduplication. Appending is the only mutation; the log never
/// loses or reorders an entry. `on_removal` never fails.
#[derive(Debug)]
pub struct ConsumingListener<K, V> {
    log: Mutex<Vec<RemovalNotification<K, V>>>,
}

impl<K, V> ConsumingListener<K, V> {
    /// Create a listener with an empty log
    pub fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every notification received so far, in arrival order
    pub fn evicted(&self) -> Vec<RemovalNotification<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.log.lock().clone()
    }

    /// Number of notifications received so far
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    /// Whether no notification has been received yet
    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }
}

impl<K, V> Default for ConsumingListener<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Send, V: Send> RemovalListener<K, V> for ConsumingListener<K, V> {
    fn on_removal(&self, key: K, value: V, cause: RemovalCause) -> ListenerResult<K, V> {
        let notification = RemovalNotification::new(key, value, cause);
        let mut log = self.log.lock();
        log.push(notification);
        trace!(cause = %cause, total = log.len(), "recorded removal notification");
        Ok(())
    }
}

/// A removal listener that stores the notifications for inspection
pub fn consuming<K: Send, V: Send>() -> ConsumingListener<K, V> {
    ConsumingListener::new()
}
