//! Core primitives for Roster.
//!
//! This crate provides the signal/slot mechanism that the roster model uses
//! for change notification. It is deliberately small: signals here are
//! synchronous and single-threaded, matching the model's owner-thread
//! contract. There is no event loop, no queued delivery, and no cross-thread
//! marshaling; a caller that produces events on another thread must marshal
//! them onto the owner thread before touching a signal's emitter.
//!
//! # Signal/Slot Example
//!
//! ```
//! use roster_core::Signal;
//!
//! let label_changed = Signal::<String>::new();
//!
//! let conn_id = label_changed.connect(|label| {
//!     println!("label changed to: {}", label);
//! });
//!
//! label_changed.emit("ops".to_string());
//!
//! label_changed.disconnect(conn_id);
//! ```

mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
