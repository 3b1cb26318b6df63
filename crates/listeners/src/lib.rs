//! Removal-listener test doubles for `cacheprobe`
//!
//! This crate provides the two interchangeable listener implementations a
//! test harness installs into a cache under test:
//! - [`ConsumingListener`] records every notification it receives into an
//!   ordered, thread-safe log for later assertions.
//! - [`RejectingListener`] fails each notification with a rejection error
//!   while its toggle is on, counting how many rejections occurred.
//!
//! Neither implementation caches, evicts, or dispatches anything itself;
//! both only react to `on_removal` calls made by an external cache.

pub mod consuming;
pub mod rejecting;

pub use consuming::{consuming, ConsumingListener};
pub use rejecting::{rejecting, RejectingListener};

// Re-export the shared contract so harnesses depend on one crate.
pub use cacheprobe_core::{
    Error, ListenerResult, RemovalCause, RemovalListener, RemovalNotification,
};
