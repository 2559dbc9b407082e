//! Synchronous signal/slot system.
//!
//! A [`Signal<Args>`] holds zero or more connected slots (callbacks) and
//! invokes all of them, in the emitting thread, when [`Signal::emit`] is
//! called. Emission is a plain synchronous call chain: every slot has run
//! before `emit` returns.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - Guard that disconnects when dropped
//!
//! # Re-entrancy
//!
//! Slots may freely connect or disconnect other slots while a signal is
//! being emitted; the connection table is not held locked during slot
//! invocation. Connections added during an emission are first invoked on
//! the next emission.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A signal with zero or more connected slots.
///
/// When the signal is emitted, every connected slot is invoked with a
/// reference to the provided arguments, in the emitting thread, before
/// `emit` returns.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple like `(String, usize)` for
///   multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot
    /// later.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("got: {}", s));
    /// signal.emit("hello".to_string());
    /// signal.disconnect(id);
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot with automatic disconnection when the guard is dropped.
    ///
    /// The guard borrows the signal, so it cannot outlive it.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_core::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let signal = Signal::<i32>::new();
    /// let counter = Arc::new(AtomicI32::new(0));
    /// {
    ///     let counter = counter.clone();
    ///     let _guard = signal.connect_scoped(move |&n| {
    ///         counter.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42);
    /// }
    /// signal.emit(43); // nothing happens, connection was dropped
    /// assert_eq!(counter.load(Ordering::SeqCst), 42);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: self.connect(slot),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// setup to suppress cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots synchronously.
    ///
    /// If the signal is blocked, this does nothing. Slots receive a shared
    /// reference to `args`; the value is dropped when `emit` returns.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "roster_core::signal", "signal blocked, skipping emit");
            return;
        }

        // Snapshot the slots so handlers can connect/disconnect re-entrantly.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(
            target: "roster_core::signal",
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`]. Useful for subscribers whose
/// lifetime is shorter than the signal's, such as a view that is torn down
/// while the model lives on.
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The ID of the underlying connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        let _ = self.signal.disconnect(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        let values = received.lock();
        assert_eq!(*values, vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        let values = received.lock();
        assert_eq!(*values, vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2); // ignored
        signal.set_blocked(false);
        signal.emit(3);

        let values = received.lock();
        assert_eq!(*values, vec![1, 3]);
    }

    #[test]
    fn test_multiple_connections() {
        let signal = Signal::<String>::new();
        let count = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let count_clone = count.clone();
            signal.connect(move |_| {
                *count_clone.lock() += 1;
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit("test".to_string());
        assert_eq!(*count.lock(), 3);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();

        for _ in 0..5 {
            signal.connect(|_| {});
        }

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        {
            let received_clone = received.clone();
            let _guard = signal.connect_scoped(move |&value| {
                received_clone.lock().push(value);
            });
            signal.emit(1);
        } // guard dropped, connection removed

        signal.emit(2);

        let values = received.lock();
        assert_eq!(*values, vec![1]);
    }

    #[test]
    fn test_signal_with_no_args() {
        let signal = Signal::<()>::new();
        let called = Arc::new(AtomicBool::new(false));

        let called_clone = called.clone();
        signal.connect(move |_| {
            called_clone.store(true, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_reentrant_disconnect_from_slot() {
        // A slot may disconnect connections while the signal is emitting.
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(Mutex::new(0));

        let signal_clone = signal.clone();
        let count_clone = count.clone();
        signal.connect(move |_| {
            *count_clone.lock() += 1;
            signal_clone.disconnect_all();
        });

        signal.emit(());
        signal.emit(());

        assert_eq!(*count.lock(), 1);
        assert_eq!(signal.connection_count(), 0);
    }
}
