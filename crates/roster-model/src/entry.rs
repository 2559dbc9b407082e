//! Entry traits and the level discriminator.
//!
//! Nodes in the index live on exactly two levels: parents (servers, user
//! groups) and children (channels, nicks). Both levels implement
//! [`TreeEntry`]; consumers that hold an address rather than a typed handle
//! go through [`EntryRef`], a closed sum over the two levels that replaces
//! any need for downcasting.

/// Discriminator for the two fixed levels of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A top-level entry owning an ordered run of children.
    Parent,
    /// A leaf entry owned by exactly one parent.
    Child,
}

/// Capability set shared by both tree levels.
///
/// # Identity vs. label
///
/// `id` is stable and immutable for the entry's lifetime, unique within its
/// scope (the root run for parents, the owning parent's run for children).
/// All keyed lookups go through it. `label` is display-only and mutable;
/// changing it never moves the entry.
pub trait TreeEntry {
    /// Stable identity, unique within the entry's scope.
    fn id(&self) -> &str;

    /// Current display label.
    fn label(&self) -> &str;

    /// Replace the display label. Does not affect identity or position.
    fn set_label(&mut self, label: String);
}

/// Borrowed view of a node, discriminated by level.
///
/// Returned by address-based accessors on the model, where the level is not
/// statically known. Typed access is explicit via [`EntryRef::as_parent`] /
/// [`EntryRef::as_child`]; there is no unchecked cast anywhere.
#[derive(Debug, Clone, Copy)]
pub enum EntryRef<'a, P, C> {
    /// A top-level entry.
    Parent(&'a P),
    /// A leaf entry.
    Child(&'a C),
}

impl<'a, P: TreeEntry, C: TreeEntry> EntryRef<'a, P, C> {
    /// The level this entry lives on.
    pub fn kind(&self) -> EntryKind {
        match self {
            EntryRef::Parent(_) => EntryKind::Parent,
            EntryRef::Child(_) => EntryKind::Child,
        }
    }

    /// Stable identity of the underlying entry.
    pub fn id(&self) -> &'a str {
        match *self {
            EntryRef::Parent(p) => p.id(),
            EntryRef::Child(c) => c.id(),
        }
    }

    /// Display label of the underlying entry.
    pub fn label(&self) -> &'a str {
        match *self {
            EntryRef::Parent(p) => p.label(),
            EntryRef::Child(c) => c.label(),
        }
    }

    /// The parent entry, if this is one.
    pub fn as_parent(&self) -> Option<&'a P> {
        match *self {
            EntryRef::Parent(p) => Some(p),
            EntryRef::Child(_) => None,
        }
    }

    /// The child entry, if this is one.
    pub fn as_child(&self) -> Option<&'a C> {
        match *self {
            EntryRef::Parent(_) => None,
            EntryRef::Child(c) => Some(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(String);

    impl TreeEntry for Named {
        fn id(&self) -> &str {
            &self.0
        }

        fn label(&self) -> &str {
            &self.0
        }

        fn set_label(&mut self, label: String) {
            self.0 = label;
        }
    }

    #[test]
    fn test_entry_ref_discrimination() {
        let parent = Named("group".into());
        let child = Named("nick".into());

        let p: EntryRef<'_, Named, Named> = EntryRef::Parent(&parent);
        let c: EntryRef<'_, Named, Named> = EntryRef::Child(&child);

        assert_eq!(p.kind(), EntryKind::Parent);
        assert_eq!(c.kind(), EntryKind::Child);
        assert_eq!(p.id(), "group");
        assert_eq!(c.label(), "nick");
        assert!(p.as_parent().is_some());
        assert!(p.as_child().is_none());
        assert!(c.as_child().is_some());
    }
}
