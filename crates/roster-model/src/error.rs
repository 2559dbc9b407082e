//! Error types for the roster model.

/// Result type alias for roster model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when mutating or querying the index.
///
/// All of these are local, recoverable conditions returned to the caller;
/// the model never panics on bad input and never leaves the tree in a
/// partially mutated state. A `NotFound` from a removal or rename usually
/// means "already absent" and is safe to ignore when replaying duplicate
/// protocol events. A `DuplicateId` signals an ordering bug upstream and is
/// logged at `warn` before being returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An insert collided with an entry that already exists in its scope.
    #[error("an entry with id '{id}' already exists")]
    DuplicateId { id: String },

    /// A keyed lookup referenced an id that is not present.
    #[error("no entry with id '{id}'")]
    NotFound { id: String },

    /// An address from before a structural mutation was used for resolution.
    #[error("stale address: minted at generation {address}, tree is at generation {current}")]
    StaleAddress { address: u64, current: u64 },
}

impl Error {
    /// Create a `DuplicateId` error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create a `NotFound` error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
