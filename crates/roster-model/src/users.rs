//! The user tree configuration: groups at the top level, nicks under them.
//!
//! One tree of these lives per channel. "user joined" maps to
//! [`add_child`](crate::RosterModel::add_child), "user left" to
//! [`remove_child`](crate::RosterModel::remove_child), and a nick change to
//! [`rename_child`](crate::RosterModel::rename_child): the displayed nick
//! is the mutable label, while the entry keeps its join-time nick as the
//! stable id the event stream is keyed on.

use crate::entry::TreeEntry;
use crate::model::RosterModel;

/// The user tree: [`UserGroupEntry`] parents owning [`UserEntry`] children.
pub type UserTree = RosterModel<UserGroupEntry, UserEntry>;

/// A user group (by access level, typically) at the top of the user tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroupEntry {
    id: String,
    name: String,
}

impl UserGroupEntry {
    /// Creates a group whose id and display name start out as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TreeEntry for UserGroupEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn set_label(&mut self, label: String) {
        self.name = label;
    }
}

/// A user shown under a group.
///
/// The id is the join-time nick and never changes; a rename only moves the
/// displayed nick. Collaborators that track a user across renames keep the
/// id, not the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    id: String,
    nick: String,
}

impl UserEntry {
    /// Creates a user entry whose id and displayed nick start out as `nick`.
    pub fn new(nick: impl Into<String>) -> Self {
        let nick = nick.into();
        Self {
            id: nick.clone(),
            nick,
        }
    }

    /// The currently displayed nick.
    pub fn nick(&self) -> &str {
        &self.nick
    }
}

impl TreeEntry for UserEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.nick
    }

    fn set_label(&mut self, label: String) {
        self.nick = label;
    }
}
