//! Error type raised by removal listeners

use crate::notification::RemovalNotification;

/// Result type alias for listener invocations
pub type ListenerResult<K, V> = std::result::Result<(), Error<K, V>>;

/// Error a removal listener can signal to the cache that invoked it
///
/// Carries the full notification as structured context so tests can assert
/// on the key, value, and cause rather than on message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<K, V> {
    /// A listener configured to reject refused the notification
    #[error("rejected removal of entry {notification}")]
    Rejected {
        notification: RemovalNotification<K, V>,
    },
}

impl<K, V> Error<K, V> {
    /// The notification the listener refused
    pub fn notification(&self) -> &RemovalNotification<K, V> {
        let Error::Rejected { notification } = self;
        notification
    }
}
