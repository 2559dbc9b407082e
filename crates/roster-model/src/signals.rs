//! Change notifications emitted by the model.
//!
//! Views connect to these signals once and translate addresses to rows on
//! demand instead of copying data out. The model emits exactly one event
//! per successful mutation, synchronously, in the order the mutations were
//! issued; a rejected mutation emits nothing.
//!
//! Every emitted address is stamped with the post-mutation generation, so
//! it resolves cleanly inside the notification callback and goes stale at
//! the next structural mutation.

use roster_core::Signal;

use crate::address::RosterAddress;

/// Collection of signals emitted by a [`RosterModel`](crate::RosterModel).
///
/// # Re-entrancy
///
/// Slots must not mutate the emitting model: the notifier may still be
/// iterating positions the mutation would shift. This is a documented
/// precondition, not structurally prevented.
pub struct RosterSignals {
    /// Emitted after the whole tree has been replaced via `reset`.
    ///
    /// All previously minted addresses are stale after this fires;
    /// subscribers re-fetch by id.
    pub model_reset: Signal<()>,

    /// Emitted after rows have been inserted.
    /// Args: (owning address, first row, last row).
    ///
    /// The owning address is the root address for parent-level inserts, or
    /// a parent address for child-level inserts.
    pub rows_inserted: Signal<(RosterAddress, usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (owning address, first row, last row).
    pub rows_removed: Signal<(RosterAddress, usize, usize)>,

    /// Emitted when an existing item's data changes without moving it
    /// (rename, topic change, enable/disable).
    pub data_changed: Signal<RosterAddress>,
}

impl Default for RosterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSignals {
    /// Creates a new set of model signals with no connections.
    pub fn new() -> Self {
        Self {
            model_reset: Signal::new(),
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            data_changed: Signal::new(),
        }
    }
}
