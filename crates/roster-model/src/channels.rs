//! The channel tree configuration: servers at the top level, joined
//! channels under them.
//!
//! The bouncer session layer drives this tree: "server list received" maps
//! to [`reset`](crate::RosterModel::reset), "channel joined" to
//! [`add_child`](crate::RosterModel::add_child), "channel parted" to
//! [`remove_child`](crate::RosterModel::remove_child), and topic or
//! enabled-state updates to [`modify_child`](crate::RosterModel::modify_child).

use crate::entry::TreeEntry;
use crate::model::RosterModel;

/// The channel tree: [`ServerEntry`] parents owning [`ChannelEntry`] children.
pub type ChannelTree = RosterModel<ServerEntry, ChannelEntry>;

/// A bouncer connection shown at the top level of the channel tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    id: String,
    name: String,
}

impl ServerEntry {
    /// Creates a server entry. `id` is the connection id assigned by the
    /// bouncer; `name` is what the sidebar shows.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TreeEntry for ServerEntry {
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

/// A joined channel shown under its server.
///
/// The channel's identity is its join-time name; the display label starts
/// out identical and may diverge afterwards. Topic and the disabled flag
/// are non-positional attributes: update them through
/// [`modify_child`](crate::RosterModel::modify_child) so the view hears
/// about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    name: String,
    label: String,
    topic: String,
    disabled: bool,
}

impl ChannelEntry {
    /// Creates a channel entry for a freshly joined channel.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            topic: String::new(),
            disabled: false,
        }
    }

    /// The join-time channel name (the identity).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Replaces the topic.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Whether the channel is disabled (parted or detached on the bouncer).
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

impl TreeEntry for ChannelEntry {
    fn id(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }
}
