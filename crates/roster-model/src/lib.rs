//! Observable two-level tree index for chat-client sidebars.
//!
//! A bouncer-backed chat client keeps two sidebar trees alive for the whole
//! session: the channel list (servers owning channels) and the user list
//! (groups owning nicks). Both are one data structure, implemented here
//! once: a mutable, ordered collection of parent entries, each owning an
//! ordered collection of children, addressed by row, with fine-grained
//! change notifications so a view updates incrementally instead of
//! redrawing.
//!
//! # Core Types
//!
//! - [`RosterModel`]: the generic two-level index
//! - [`RosterAddress`]: a generation-stamped position in the tree
//! - [`TreeEntry`] / [`EntryKind`] / [`EntryRef`]: the node contract and its
//!   level discriminator
//! - [`RosterSignals`]: the change-notification bundle
//! - [`Error`] / [`Result`]: the error taxonomy
//!
//! # Shipped Configurations
//!
//! - [`ChannelTree`]: [`ServerEntry`] parents, [`ChannelEntry`] children
//! - [`UserTree`]: [`UserGroupEntry`] parents, [`UserEntry`] children
//!
//! # Example
//!
//! ```
//! use roster_model::{ChannelTree, ChannelEntry, ServerEntry};
//!
//! let tree = ChannelTree::new();
//!
//! // a view subscribes once and re-resolves addresses on each event
//! tree.signals().rows_inserted.connect(|&(parent, first, last)| {
//!     println!("rows {first}..={last} inserted under {parent:?}");
//! });
//!
//! tree.add_parent(ServerEntry::new("libera", "Libera.Chat")).unwrap();
//! tree.add_child("libera", ChannelEntry::new("#rust")).unwrap();
//!
//! let server = tree.address_of_parent("libera").unwrap();
//! assert_eq!(tree.row_count(&server).unwrap(), 1);
//! ```
//!
//! # Contract
//!
//! Mutations and reads belong to a single owner thread; notification
//! delivery is synchronous, in mutation order, exactly one event per
//! successful mutation. Addresses are valid only until the next structural
//! mutation: they carry the tree generation they were minted under, and
//! resolving a stale one fails with [`Error::StaleAddress`]. Subscribers
//! re-resolve by id rather than caching positions.

mod address;
mod channels;
mod entry;
mod error;
mod model;
mod signals;
mod users;

pub use address::RosterAddress;
pub use channels::{ChannelEntry, ChannelTree, ServerEntry};
pub use entry::{EntryKind, EntryRef, TreeEntry};
pub use error::{Error, Result};
pub use model::RosterModel;
pub use signals::RosterSignals;
pub use users::{UserEntry, UserGroupEntry, UserTree};
