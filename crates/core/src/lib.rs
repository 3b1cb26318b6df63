//! Core domain types and errors for the `cacheprobe` test-support facility.
//!
//! This crate establishes the contract shared by every removal-listener
//! implementation: the notification record handed to a listener, the
//! enumerated removal causes, and the error a misbehaving listener raises.
//! It deliberately contains no cache, eviction, or dispatch logic of its
//! own.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the `Error` enum and `ListenerResult` type alias,
//!   centralizing the single failure mode a listener can signal.
//! - **`cause`**: The enumerated reasons a cache removes an entry.
//! - **`notification`**: The immutable record of one observed removal.
//! - **`listener`**: The capability contract a cache under test invokes.

pub mod cause;
pub mod errors;
pub mod listener;
pub mod notification;

pub use self::{
    cause::RemovalCause,
    errors::{Error, ListenerResult},
    listener::RemovalListener,
    notification::RemovalNotification,
};
