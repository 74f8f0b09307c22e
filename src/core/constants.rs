//! Protocol constants for the push channel and the mutation surface.
//!
//! Event kind names and request paths are fixed by the remote authority and
//! MUST NOT be changed.

// =============================================================================
// CHANNEL EVENT KINDS
// =============================================================================

/// Event carrying the full current list state, sent once per subscription.
pub const EVENT_SNAPSHOT: &str = "snapshot";

/// Event carrying a newly created record with its assigned identifier.
pub const EVENT_CREATED: &str = "created";

/// Event carrying the new contents of an existing record.
pub const EVENT_UPDATED: &str = "updated";

/// Event carrying the identifier of a removed record.
pub const EVENT_DELETED: &str = "deleted";

// =============================================================================
// CHANNEL FRAMING
// =============================================================================

/// Maximum accepted size of one channel frame in bytes.
///
/// Bounds the snapshot frame as well; any authority list that fits a UI
/// comfortably fits this.
pub const MAX_FRAME_SIZE: usize = 4 * 1024 * 1024;

// =============================================================================
// MUTATION REQUEST PATHS
// =============================================================================

/// Path for creation requests (POST).
pub const PATH_CREATE: &str = "add-book";

/// Path prefix for update requests (PUT `/update-book/{id}`).
pub const PATH_UPDATE: &str = "update-book";

/// Path prefix for deletion requests (DELETE `/delete-book/{id}`).
pub const PATH_DELETE: &str = "delete-book";
