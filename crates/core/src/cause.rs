//! Enumerated reasons for the removal of a cache entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason a cache removed or evicted an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalCause {
    /// The entry was removed by an explicit user request
    Explicit,
    /// The entry's value was replaced by a newer write
    Replaced,
    /// The entry was reclaimed by reference collection
    Collected,
    /// The entry's expiry deadline passed
    Expired,
    /// The entry was evicted to keep the cache within its size bound
    Size,
}

impl RemovalCause {
    /// Whether the removal was automatic rather than user-initiated
    pub fn was_evicted(self) -> bool {
        matches!(self, Self::Collected | Self::Expired | Self::Size)
    }
}

impl fmt::Display for RemovalCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Explicit => "explicit",
            Self::Replaced => "replaced",
            Self::Collected => "collected",
            Self::Expired => "expired",
            Self::Size => "size",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_initiated_causes_are_not_evictions() {
        assert!(!RemovalCause::Explicit.was_evicted());
        assert!(!RemovalCause::Replaced.was_evicted());
    }

    #[test]
    fn test_automatic_causes_are_evictions() {
        assert!(RemovalCause::Collected.was_evicted());
        assert!(RemovalCause::Expired.was_evicted());
        assert!(RemovalCause::Size.was_evicted());
    }

    #[test]
    fn test_display_renders_lowercase_name() {
        assert_eq!(RemovalCause::Explicit.to_string(), "explicit");
        assert_eq!(RemovalCause::Size.to_string(), "size");
    }

    #[test]
    fn test_serializes_as_variant_name() {
        let json = serde_json::to_string(&RemovalCause::Expired).unwrap();
        assert_eq!(json, "\"Expired\"");

        let cause: RemovalCause = serde_json::from_str("\"Replaced\"").unwrap();
        assert_eq!(cause, RemovalCause::Replaced);
    }
}
