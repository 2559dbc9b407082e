//! Addresses for items in the two-level index.
//!
//! A [`RosterAddress`] locates a row in the tree: the root (the run of
//! parents itself), a parent row, or a (parent row, child row) pair. It is
//! the coin the model and its subscribers trade in: change notifications
//! carry addresses, and the read API resolves them back to entries.
//!
//! # Address Validity
//!
//! Addresses are positional and therefore perishable. Every address is
//! stamped with the tree generation it was minted under; structural
//! mutations (reset, insert, remove) bump the generation, and resolving an
//! address from an older generation fails with
//! [`StaleAddress`](crate::Error::StaleAddress). Subscribers must not cache
//! addresses across notification boundaries; re-resolve by id instead.

use crate::entry::EntryKind;

/// The position a [`RosterAddress`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Slot {
    /// The root: the ordered run of parents.
    Root,
    /// A parent row.
    Parent { row: usize },
    /// A child row under a parent row.
    Child { parent_row: usize, row: usize },
}

/// A generation-stamped position in the index.
///
/// Addresses are minted by the model (from mutations, keyed lookups, and
/// notifications) and handed back to it for resolution. Two addresses are
/// equal only if they name the same position *and* were minted under the
/// same generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RosterAddress {
    slot: Slot,
    generation: u64,
}

impl RosterAddress {
    pub(crate) fn root(generation: u64) -> Self {
        Self {
            slot: Slot::Root,
            generation,
        }
    }

    pub(crate) fn parent(row: usize, generation: u64) -> Self {
        Self {
            slot: Slot::Parent { row },
            generation,
        }
    }

    pub(crate) fn child(parent_row: usize, row: usize, generation: u64) -> Self {
        Self {
            slot: Slot::Child { parent_row, row },
            generation,
        }
    }

    pub(crate) fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns `true` if this address names the root itself.
    #[inline]
    pub fn is_root(&self) -> bool {
        matches!(self.slot, Slot::Root)
    }

    /// The level of the entry this address points at, or `None` for the root.
    #[inline]
    pub fn kind(&self) -> Option<EntryKind> {
        match self.slot {
            Slot::Root => None,
            Slot::Parent { .. } => Some(EntryKind::Parent),
            Slot::Child { .. } => Some(EntryKind::Child),
        }
    }

    /// The row within the owning run, or `None` for the root.
    #[inline]
    pub fn row(&self) -> Option<usize> {
        match self.slot {
            Slot::Root => None,
            Slot::Parent { row } | Slot::Child { row, .. } => Some(row),
        }
    }

    /// For a child address, the row of its owning parent.
    #[inline]
    pub fn parent_row(&self) -> Option<usize> {
        match self.slot {
            Slot::Child { parent_row, .. } => Some(parent_row),
            _ => None,
        }
    }

    /// The address one level up: child to parent, parent to root, root to
    /// itself.
    pub fn owner(&self) -> RosterAddress {
        match self.slot {
            Slot::Root => *self,
            Slot::Parent { .. } => RosterAddress::root(self.generation),
            Slot::Child { parent_row, .. } => RosterAddress::parent(parent_row, self.generation),
        }
    }

    /// Depth below the root: 0 for the root, 1 for parents, 2 for children.
    pub fn depth(&self) -> usize {
        match self.slot {
            Slot::Root => 0,
            Slot::Parent { .. } => 1,
            Slot::Child { .. } => 2,
        }
    }

    /// The tree generation this address was minted under.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl std::fmt::Debug for RosterAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.slot {
            Slot::Root => write!(f, "RosterAddress(root @{})", self.generation),
            Slot::Parent { row } => write!(f, "RosterAddress(parent {} @{})", row, self.generation),
            Slot::Child { parent_row, row } => write!(
                f,
                "RosterAddress(child {}.{} @{})",
                parent_row, row, self.generation
            ),
        }
    }
}
