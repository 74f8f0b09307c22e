//! Sync layer: event model and collection reconciliation.
//!
//! Implements:
//! - The channel event model (snapshot plus created/updated/deleted)
//! - Arrival-order reconciliation of a local ordered collection
//! - Idempotent application of re-delivered events
//!
//! Pure data; no I/O. The channel layer feeds decoded events in, the client
//! layer holds the collection.

mod collection;
mod event;

pub use collection::*;
pub use event::*;
