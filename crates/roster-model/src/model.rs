//! The observable two-level index.
//!
//! `RosterModel` owns an ordered run of parent entries, each owning an
//! ordered run of children, and emits fine-grained change notifications so
//! a view can update incrementally. The channel tree (servers/channels) and
//! the user tree (groups/nicks) are the two shipped configurations of this
//! one type.

use parking_lot::RwLock;

use crate::address::{RosterAddress, Slot};
use crate::entry::{EntryRef, TreeEntry};
use crate::error::{Error, Result};
use crate::signals::RosterSignals;

/// A parent entry and the ordered run of children it owns.
struct ParentNode<P, C> {
    entry: P,
    children: Vec<C>,
}

impl<P: TreeEntry, C: TreeEntry> ParentNode<P, C> {
    /// Current row of a child within this parent.
    ///
    /// Always a fresh linear scan. This is the single source of truth for
    /// "current row of a child"; rows are never cached anywhere.
    fn position_of(&self, child_id: &str) -> Option<usize> {
        self.children.iter().position(|c| c.id() == child_id)
    }
}

/// Backing storage: the parent run plus the tree generation.
struct RosterStorage<P, C> {
    parents: Vec<ParentNode<P, C>>,
    /// Bumped by every structural mutation (reset, insert, remove).
    generation: u64,
}

impl<P: TreeEntry, C: TreeEntry> RosterStorage<P, C> {
    fn new() -> Self {
        Self {
            parents: Vec::new(),
            generation: 0,
        }
    }

    fn position_of_parent(&self, parent_id: &str) -> Option<usize> {
        self.parents.iter().position(|n| n.entry.id() == parent_id)
    }

    fn node(&self, parent_id: &str) -> Result<(usize, &ParentNode<P, C>)> {
        let row = self
            .position_of_parent(parent_id)
            .ok_or_else(|| Error::not_found(parent_id))?;
        Ok((row, &self.parents[row]))
    }

    fn node_mut(&mut self, parent_id: &str) -> Result<(usize, &mut ParentNode<P, C>)> {
        let row = self
            .position_of_parent(parent_id)
            .ok_or_else(|| Error::not_found(parent_id))?;
        Ok((row, &mut self.parents[row]))
    }

    fn check_address(&self, address: &RosterAddress) -> Result<()> {
        if address.generation() != self.generation {
            return Err(Error::StaleAddress {
                address: address.generation(),
                current: self.generation,
            });
        }
        Ok(())
    }
}

/// An observable, mutable collection of parents each owning an ordered run
/// of children.
///
/// The tree is fixed at exactly two levels. Parents are unique by id within
/// the root; children are unique by id within their parent. Insertion order
/// is display order: the model preserves the order it is given and never
/// sorts (a collaborator wanting alphabetical channels sorts before calling
/// [`reset`](Self::reset) / [`add_child`](Self::add_child)).
///
/// # Notifications
///
/// Every successful mutation emits exactly one event on
/// [`signals`](Self::signals) before returning: `model_reset`,
/// `rows_inserted`, `rows_removed`, or `data_changed`. Rejected mutations
/// emit nothing and leave the tree untouched.
///
/// # Threading
///
/// `RosterModel` is **not** thread-safe by contract: all mutation and read
/// traffic belongs to one owner thread, and notification delivery is a
/// synchronous call chain on that thread. Collaborators fed by another
/// execution context (an async network read, say) marshal onto the owner
/// thread first. Slots must not mutate the model re-entrantly.
///
/// # Example
///
/// ```
/// use roster_model::{RosterModel, UserEntry, UserGroupEntry};
///
/// let model = RosterModel::new();
/// model.add_parent(UserGroupEntry::new("Users")).unwrap();
/// model.add_child("Users", UserEntry::new("ada")).unwrap();
///
/// let root = model.root_address();
/// assert_eq!(model.row_count(&root).unwrap(), 1);
/// assert_eq!(model.child_count("Users").unwrap(), 1);
/// ```
pub struct RosterModel<P, C> {
    storage: RwLock<RosterStorage<P, C>>,
    signals: RosterSignals,
}

impl<P: TreeEntry, C: TreeEntry> Default for RosterModel<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TreeEntry, C: TreeEntry> RosterModel<P, C> {
    /// Creates a new empty model at generation 0.
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(RosterStorage::new()),
            signals: RosterSignals::new(),
        }
    }

    /// The signals this model emits. Views connect once, here.
    pub fn signals(&self) -> &RosterSignals {
        &self.signals
    }

    /// The current tree generation.
    pub fn generation(&self) -> u64 {
        self.storage.read().generation
    }

    /// A fresh address for the root (the parent run itself).
    pub fn root_address(&self) -> RosterAddress {
        RosterAddress::root(self.storage.read().generation)
    }

    /// Number of parents.
    pub fn parent_count(&self) -> usize {
        self.storage.read().parents.len()
    }

    /// Returns `true` if the model holds no parents.
    pub fn is_empty(&self) -> bool {
        self.storage.read().parents.is_empty()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Atomically replaces the entire tree.
    ///
    /// This is the bulk-load path (initial server list, full roster after a
    /// reconnect): one `model_reset` event instead of N insert events. All
    /// previously minted addresses become stale.
    ///
    /// The payload is validated first; a duplicate parent id, or a duplicate
    /// child id within one parent, rejects the whole reset with
    /// [`Error::DuplicateId`] and leaves the previous tree fully intact.
    pub fn reset(&self, roots: Vec<(P, Vec<C>)>) -> Result<()> {
        for (i, (parent, children)) in roots.iter().enumerate() {
            if roots[..i].iter().any(|(p, _)| p.id() == parent.id()) {
                tracing::warn!(target: "roster_model", id = %parent.id(), "rejected reset: duplicate parent id");
                return Err(Error::duplicate_id(parent.id()));
            }
            for (j, child) in children.iter().enumerate() {
                if children[..j].iter().any(|c| c.id() == child.id()) {
                    tracing::warn!(target: "roster_model", id = %child.id(), "rejected reset: duplicate child id");
                    return Err(Error::duplicate_id(child.id()));
                }
            }
        }

        {
            let mut storage = self.storage.write();
            storage.parents = roots
                .into_iter()
                .map(|(entry, children)| ParentNode { entry, children })
                .collect();
            storage.generation += 1;
            tracing::debug!(
                target: "roster_model",
                parents = storage.parents.len(),
                generation = storage.generation,
                "model reset"
            );
        }
        self.signals.model_reset.emit(());
        Ok(())
    }

    /// Appends a parent to the root run.
    ///
    /// Emits `rows_inserted` with the root address. Fails with
    /// [`Error::DuplicateId`] if a parent with the same id is present; per
    /// the protocol contract that indicates an ordering bug upstream and is
    /// logged at `warn`.
    pub fn add_parent(&self, parent: P) -> Result<RosterAddress> {
        let (root, row);
        {
            let mut storage = self.storage.write();
            if storage.position_of_parent(parent.id()).is_some() {
                tracing::warn!(target: "roster_model", id = %parent.id(), "rejected duplicate parent");
                return Err(Error::duplicate_id(parent.id()));
            }
            row = storage.parents.len();
            tracing::debug!(target: "roster_model", id = %parent.id(), row, "parent added");
            storage.parents.push(ParentNode {
                entry: parent,
                children: Vec::new(),
            });
            storage.generation += 1;
            root = RosterAddress::root(storage.generation);
        }
        self.signals.rows_inserted.emit((root, row, row));
        Ok(RosterAddress::parent(row, root.generation()))
    }

    /// Removes a parent and everything it owns.
    ///
    /// Emits a single root-level `rows_removed` covering the parent row;
    /// the children go with it implicitly. Returns the removed entry.
    pub fn remove_parent(&self, parent_id: &str) -> Result<P> {
        let (root, row, removed);
        {
            let mut storage = self.storage.write();
            row = storage
                .position_of_parent(parent_id)
                .ok_or_else(|| Error::not_found(parent_id))?;
            removed = storage.parents.remove(row);
            storage.generation += 1;
            root = RosterAddress::root(storage.generation);
            tracing::debug!(target: "roster_model", id = %parent_id, row, "parent removed");
        }
        self.signals.rows_removed.emit((root, row, row));
        Ok(removed.entry)
    }

    /// Appends a child to the parent with the given id.
    ///
    /// Emits `rows_inserted` with the resolved parent address. Fails with
    /// [`Error::NotFound`] if the parent is absent (a missing parent is an
    /// error, never a silent no-op) and [`Error::DuplicateId`] if the parent
    /// already owns a child with this id.
    pub fn add_child(&self, parent_id: &str, child: C) -> Result<RosterAddress> {
        let (parent_addr, parent_row, row);
        {
            let mut storage = self.storage.write();
            let (found_row, node) = storage.node_mut(parent_id)?;
            parent_row = found_row;
            if node.position_of(child.id()).is_some() {
                tracing::warn!(
                    target: "roster_model",
                    parent = %parent_id,
                    id = %child.id(),
                    "rejected duplicate child"
                );
                return Err(Error::duplicate_id(child.id()));
            }
            row = node.children.len();
            tracing::debug!(target: "roster_model", parent = %parent_id, id = %child.id(), row, "child added");
            node.children.push(child);
            storage.generation += 1;
            parent_addr = RosterAddress::parent(parent_row, storage.generation);
        }
        self.signals.rows_inserted.emit((parent_addr, row, row));
        Ok(RosterAddress::child(parent_row, row, parent_addr.generation()))
    }

    /// Removes a child from its parent's run.
    ///
    /// Emits `rows_removed` with the resolved parent address and returns the
    /// removed entry. Rows of later siblings shift down by one. A second
    /// removal of the same id yields [`Error::NotFound`] without altering
    /// the tree or emitting anything, which makes duplicate "left" events
    /// from the bouncer safe to replay.
    pub fn remove_child(&self, parent_id: &str, child_id: &str) -> Result<C> {
        let (parent_addr, row, removed);
        {
            let mut storage = self.storage.write();
            let (parent_row, node) = storage.node_mut(parent_id)?;
            row = node
                .position_of(child_id)
                .ok_or_else(|| Error::not_found(child_id))?;
            removed = node.children.remove(row);
            storage.generation += 1;
            parent_addr = RosterAddress::parent(parent_row, storage.generation);
            tracing::debug!(target: "roster_model", parent = %parent_id, id = %child_id, row, "child removed");
        }
        self.signals.rows_removed.emit((parent_addr, row, row));
        Ok(removed)
    }

    /// Replaces a child's display label in place.
    ///
    /// Identity and position are untouched, so the generation does not
    /// advance and outstanding addresses stay live. Emits `data_changed` at
    /// the child's address.
    pub fn rename_child(
        &self,
        parent_id: &str,
        child_id: &str,
        new_label: impl Into<String>,
    ) -> Result<()> {
        let addr;
        {
            let mut storage = self.storage.write();
            let (parent_row, node) = storage.node_mut(parent_id)?;
            let row = node
                .position_of(child_id)
                .ok_or_else(|| Error::not_found(child_id))?;
            node.children[row].set_label(new_label.into());
            addr = RosterAddress::child(parent_row, row, storage.generation);
            tracing::debug!(target: "roster_model", parent = %parent_id, id = %child_id, "child renamed");
        }
        self.signals.data_changed.emit(addr);
        Ok(())
    }

    /// Announces that a parent's non-positional data changed.
    ///
    /// Emits `data_changed` at the parent's resolved address without
    /// mutating anything.
    pub fn mark_parent_changed(&self, parent_id: &str) -> Result<()> {
        let addr = self.address_of_parent(parent_id)?;
        self.signals.data_changed.emit(addr);
        Ok(())
    }

    /// Announces that a child's non-positional data changed.
    ///
    /// Emits `data_changed` at the child's resolved address without
    /// mutating anything.
    pub fn mark_child_changed(&self, parent_id: &str, child_id: &str) -> Result<()> {
        let addr = self.address_of_child(parent_id, child_id)?;
        self.signals.data_changed.emit(addr);
        Ok(())
    }

    /// Mutable access to a parent entry, announced as a data change.
    ///
    /// Emits `data_changed` at the parent's address after `f` runs.
    pub fn modify_parent<F, R>(&self, parent_id: &str, f: F) -> Result<R>
    where
        F: FnOnce(&mut P) -> R,
    {
        let (addr, result);
        {
            let mut storage = self.storage.write();
            let (row, node) = storage.node_mut(parent_id)?;
            result = f(&mut node.entry);
            addr = RosterAddress::parent(row, storage.generation);
        }
        self.signals.data_changed.emit(addr);
        Ok(result)
    }

    /// Mutable access to a child entry, announced as a data change.
    ///
    /// This is the path for attribute updates that do not move the child: a
    /// channel's topic, its disabled flag. Emits `data_changed` at the
    /// child's address after `f` runs.
    pub fn modify_child<F, R>(&self, parent_id: &str, child_id: &str, f: F) -> Result<R>
    where
        F: FnOnce(&mut C) -> R,
    {
        let (addr, result);
        {
            let mut storage = self.storage.write();
            let (parent_row, node) = storage.node_mut(parent_id)?;
            let row = node
                .position_of(child_id)
                .ok_or_else(|| Error::not_found(child_id))?;
            result = f(&mut node.children[row]);
            addr = RosterAddress::child(parent_row, row, storage.generation);
        }
        self.signals.data_changed.emit(addr);
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Address resolution
    // -------------------------------------------------------------------------

    /// Number of rows under an address.
    ///
    /// The root address yields the parent count, a parent address its child
    /// count, and a child address 0: children are leaves, the two-level
    /// shape is fixed. A stale address yields [`Error::StaleAddress`].
    pub fn row_count(&self, address: &RosterAddress) -> Result<usize> {
        let storage = self.storage.read();
        storage.check_address(address)?;
        Ok(match address.slot() {
            Slot::Root => storage.parents.len(),
            Slot::Parent { row } => storage.parents.get(row).map_or(0, |n| n.children.len()),
            Slot::Child { .. } => 0,
        })
    }

    /// A fresh address for the parent with the given id.
    pub fn address_of_parent(&self, parent_id: &str) -> Result<RosterAddress> {
        let storage = self.storage.read();
        let (row, _) = storage.node(parent_id)?;
        Ok(RosterAddress::parent(row, storage.generation))
    }

    /// A fresh address for the child with the given id under the given parent.
    pub fn address_of_child(&self, parent_id: &str, child_id: &str) -> Result<RosterAddress> {
        let storage = self.storage.read();
        let (parent_row, node) = storage.node(parent_id)?;
        let row = node
            .position_of(child_id)
            .ok_or_else(|| Error::not_found(child_id))?;
        Ok(RosterAddress::child(parent_row, row, storage.generation))
    }

    /// Reverse lookup: the address of the entry owning the addressed one.
    ///
    /// A child resolves to its parent, a parent to the root, the root to
    /// itself. Positions carried by a current-generation address are live
    /// (nothing has moved since it was minted), so the owner's row is
    /// re-stamped directly; a stale address is rejected with
    /// [`Error::StaleAddress`] rather than mistranslated.
    pub fn parent_address(&self, address: &RosterAddress) -> Result<RosterAddress> {
        let storage = self.storage.read();
        storage.check_address(address)?;
        Ok(address.owner())
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Read access to the entry at an address, discriminated by level.
    ///
    /// Returns `Ok(None)` for the root address, which names the parent run
    /// itself rather than an entry.
    pub fn with_entry<F, R>(&self, address: &RosterAddress, f: F) -> Result<Option<R>>
    where
        F: FnOnce(EntryRef<'_, P, C>) -> R,
    {
        let storage = self.storage.read();
        storage.check_address(address)?;
        let entry = match address.slot() {
            Slot::Root => None,
            Slot::Parent { row } => storage.parents.get(row).map(|n| EntryRef::Parent(&n.entry)),
            Slot::Child { parent_row, row } => storage
                .parents
                .get(parent_row)
                .and_then(|n| n.children.get(row))
                .map(EntryRef::Child),
        };
        Ok(entry.map(f))
    }

    /// The display label at an address, or `None` for the root.
    pub fn label_at(&self, address: &RosterAddress) -> Result<Option<String>> {
        self.with_entry(address, |entry| entry.label().to_string())
    }

    /// Read access to a parent entry by id.
    pub fn with_parent<F, R>(&self, parent_id: &str, f: F) -> Result<R>
    where
        F: FnOnce(&P) -> R,
    {
        let storage = self.storage.read();
        let (_, node) = storage.node(parent_id)?;
        Ok(f(&node.entry))
    }

    /// Read access to a child entry by (parent id, child id).
    pub fn with_child<F, R>(&self, parent_id: &str, child_id: &str, f: F) -> Result<R>
    where
        F: FnOnce(&C) -> R,
    {
        let storage = self.storage.read();
        let (_, node) = storage.node(parent_id)?;
        let row = node
            .position_of(child_id)
            .ok_or_else(|| Error::not_found(child_id))?;
        Ok(f(&node.children[row]))
    }

    /// Returns `true` if a parent with this id is present.
    pub fn contains_parent(&self, parent_id: &str) -> bool {
        self.storage.read().position_of_parent(parent_id).is_some()
    }

    /// Returns `true` if the given parent owns a child with this id.
    pub fn contains_child(&self, parent_id: &str, child_id: &str) -> bool {
        let storage = self.storage.read();
        storage
            .position_of_parent(parent_id)
            .is_some_and(|row| storage.parents[row].position_of(child_id).is_some())
    }

    /// Current row of a parent in the root run.
    pub fn parent_position(&self, parent_id: &str) -> Result<usize> {
        let storage = self.storage.read();
        let (row, _) = storage.node(parent_id)?;
        Ok(row)
    }

    /// Current row of a child within its parent.
    pub fn child_position(&self, parent_id: &str, child_id: &str) -> Result<usize> {
        let storage = self.storage.read();
        let (_, node) = storage.node(parent_id)?;
        node.position_of(child_id)
            .ok_or_else(|| Error::not_found(child_id))
    }

    /// Number of children owned by a parent.
    pub fn child_count(&self, parent_id: &str) -> Result<usize> {
        let storage = self.storage.read();
        let (_, node) = storage.node(parent_id)?;
        Ok(node.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    #[derive(Debug)]
    struct Group {
        id: String,
    }

    impl Group {
        fn new(id: &str) -> Self {
            Self { id: id.into() }
        }
    }

    impl TreeEntry for Group {
        fn id(&self) -> &str {
            &self.id
        }

        fn label(&self) -> &str {
            &self.id
        }

        fn set_label(&mut self, _label: String) {}
    }

    #[derive(Debug)]
    struct Member {
        id: String,
        label: String,
    }

    impl Member {
        fn new(id: &str) -> Self {
            Self {
                id: id.into(),
                label: id.into(),
            }
        }
    }

    impl TreeEntry for Member {
        fn id(&self) -> &str {
            &self.id
        }

        fn label(&self) -> &str {
            &self.label
        }

        fn set_label(&mut self, label: String) {
            self.label = label;
        }
    }

    fn model() -> RosterModel<Group, Member> {
        RosterModel::new()
    }

    #[test]
    fn test_add_parent_and_row_count() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        model.add_parent(Group::new("b")).unwrap();

        assert_eq!(model.parent_count(), 2);
        assert_eq!(model.row_count(&model.root_address()).unwrap(), 2);
        assert_eq!(model.parent_position("b").unwrap(), 1);
    }

    #[test]
    fn test_duplicate_parent_rejected() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        let err = model.add_parent(Group::new("a")).unwrap_err();
        assert_eq!(err, Error::duplicate_id("a"));
        assert_eq!(model.parent_count(), 1);
    }

    #[test]
    fn test_add_child_to_missing_parent_is_not_found() {
        let model = model();
        let err = model.add_child("nope", Member::new("x")).unwrap_err();
        assert_eq!(err, Error::not_found("nope"));
    }

    #[test]
    fn test_child_round_trip() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        let addr = model.add_child("a", Member::new("x")).unwrap();

        assert_eq!(addr.kind(), Some(EntryKind::Child));
        assert_eq!(addr.row(), Some(0));
        assert!(model.contains_child("a", "x"));
        assert_eq!(
            model.with_child("a", "x", |c| c.id().to_string()).unwrap(),
            "x"
        );

        model.remove_child("a", "x").unwrap();
        assert!(!model.contains_child("a", "x"));
        assert_eq!(
            model.remove_child("a", "x").unwrap_err(),
            Error::not_found("x")
        );
    }

    #[test]
    fn test_removal_shifts_later_rows() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        for id in ["x", "y", "z"] {
            model.add_child("a", Member::new(id)).unwrap();
        }

        model.remove_child("a", "y").unwrap();
        assert_eq!(model.child_position("a", "x").unwrap(), 0);
        assert_eq!(model.child_position("a", "z").unwrap(), 1);
        assert_eq!(model.child_count("a").unwrap(), 2);
    }

    #[test]
    fn test_rename_changes_label_only() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        model.add_child("a", Member::new("x")).unwrap();
        model.add_child("a", Member::new("y")).unwrap();

        let generation = model.generation();
        model.rename_child("a", "x", "renamed").unwrap();

        // id, position, and generation are all untouched
        assert_eq!(model.generation(), generation);
        assert_eq!(model.child_position("a", "x").unwrap(), 0);
        assert_eq!(
            model.with_child("a", "x", |c| c.label().to_string()).unwrap(),
            "renamed"
        );
    }

    #[test]
    fn test_structural_mutation_stales_addresses() {
        let model = model();
        let addr = model.add_parent(Group::new("a")).unwrap();
        assert_eq!(model.row_count(&addr).unwrap(), 0);

        model.add_parent(Group::new("b")).unwrap();
        assert!(matches!(
            model.row_count(&addr),
            Err(Error::StaleAddress { .. })
        ));

        // re-resolving by id yields a live address
        let fresh = model.address_of_parent("a").unwrap();
        assert_eq!(model.row_count(&fresh).unwrap(), 0);
    }

    #[test]
    fn test_parent_address_reverse_lookup() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        model.add_parent(Group::new("b")).unwrap();
        model.add_child("b", Member::new("x")).unwrap();

        let child = model.address_of_child("b", "x").unwrap();
        let owner = model.parent_address(&child).unwrap();
        assert_eq!(owner, model.address_of_parent("b").unwrap());
        assert!(model.parent_address(&owner).unwrap().is_root());
    }

    #[test]
    fn test_reset_replaces_everything() {
        let model = model();
        model.add_parent(Group::new("old")).unwrap();

        model
            .reset(vec![
                (Group::new("a"), vec![Member::new("x")]),
                (Group::new("b"), vec![]),
            ])
            .unwrap();

        assert!(!model.contains_parent("old"));
        assert_eq!(model.parent_count(), 2);
        assert_eq!(model.child_count("a").unwrap(), 1);
    }

    #[test]
    fn test_reset_rejects_duplicates_atomically() {
        let model = model();
        model.add_parent(Group::new("keep")).unwrap();

        let err = model
            .reset(vec![
                (Group::new("a"), vec![Member::new("x"), Member::new("x")]),
            ])
            .unwrap_err();

        assert_eq!(err, Error::duplicate_id("x"));
        // the previous tree is fully intact
        assert!(model.contains_parent("keep"));
        assert_eq!(model.parent_count(), 1);
    }

    #[test]
    fn test_remove_parent_takes_children_along() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        model.add_child("a", Member::new("x")).unwrap();

        let removed = model.remove_parent("a").unwrap();
        assert_eq!(removed.id, "a");
        assert!(model.is_empty());
        assert_eq!(
            model.remove_parent("a").unwrap_err(),
            Error::not_found("a")
        );
    }

    #[test]
    fn test_with_entry_discriminates_levels() {
        let model = model();
        model.add_parent(Group::new("a")).unwrap();
        model.add_child("a", Member::new("x")).unwrap();

        let root = model.root_address();
        assert_eq!(model.with_entry(&root, |e| e.kind()).unwrap(), None);

        let parent = model.address_of_parent("a").unwrap();
        assert_eq!(
            model.with_entry(&parent, |e| e.kind()).unwrap(),
            Some(EntryKind::Parent)
        );
        assert_eq!(model.label_at(&parent).unwrap().as_deref(), Some("a"));

        let child = model.address_of_child("a", "x").unwrap();
        assert_eq!(
            model.with_entry(&child, |e| e.id().to_string()).unwrap(),
            Some("x".to_string())
        );
    }
}
