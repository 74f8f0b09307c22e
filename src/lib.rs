//! # Shelfsync
//!
//! Client-side synchronization for a shared inventory list.
//!
//! Shelfsync keeps each connected client's view of a mutable list consistent
//! as other clients and the server mutate it concurrently. It is built from
//! two thin, collaborating pieces:
//!
//! - **Sync client**: subscribes to a push channel, holds a local ordered
//!   collection mirroring the authority's list, and applies incoming mutation
//!   events to it in arrival order.
//! - **Mutation gateway**: issues create/update/delete requests against the
//!   remote authority. It never applies responses to local state — the
//!   broadcast event re-delivered through the push channel is the sole truth
//!   source, which avoids double-application when the originator is also a
//!   subscriber.
//!
//! Control flow: a client issues a mutation call through the gateway, the
//! authority applies it and broadcasts the resulting event to every
//! subscriber (the originator included), and each sync client reconciles its
//! local collection from the event payload.
//!
//! ## Feature Flags
//!
//! - `channel` (default): push channel framing and subscription connection
//! - `gateway` (default): HTTP mutation calls
//! - `client` (default): high-level [`client::SyncClient`]
//!
//! ## Modules
//!
//! - [`core`]: record types, validation, and error taxonomy (always included)
//! - [`sync`]: event model and collection reconciliation (always included)
//! - [`channel`]: push channel transport (requires `channel` feature)
//! - [`gateway`]: mutation requests (requires `gateway` feature)
//! - [`client`]: sync client (requires `client` feature)
//!
//! ## Example Usage
//!
//! ```rust
//! use shelfsync::prelude::*;
//!
//! let mut list: Collection<Item> = Collection::new();
//!
//! // Initial subscription delivers a full snapshot.
//! list.apply(&ListEvent::Snapshot(vec![
//!     Item::new(5, "Dune", "Herbert", 12.0),
//! ]));
//!
//! // Incremental events patch the mirror in place.
//! list.apply(&ListEvent::Updated(Item::new(5, "Dune Messiah", "Herbert", 15.0)));
//! list.apply(&ListEvent::Created(Item::new(7, "Hyperion", "Simmons", 9.5)));
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(5).unwrap().name, "Dune Messiah");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Sync layer (always included)
pub mod sync;

// Push channel (feature-gated)
#[cfg(feature = "channel")]
#[cfg_attr(docsrs, doc(cfg(feature = "channel")))]
pub mod channel;

// Mutation gateway (feature-gated)
#[cfg(feature = "gateway")]
#[cfg_attr(docsrs, doc(cfg(feature = "gateway")))]
pub mod gateway;

// Client API (feature-gated)
#[cfg(feature = "client")]
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
pub mod client;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use crate::core::*;

    // Sync layer
    pub use crate::sync::*;

    // Channel types (when enabled)
    #[cfg(feature = "channel")]
    pub use crate::channel::{ChannelConnection, ChannelError, ChannelPhase, EventCodec};

    // Gateway types (when enabled)
    #[cfg(feature = "gateway")]
    pub use crate::gateway::{GatewayConfig, GatewayError, MutationGateway, RequestOutcome};

    // Client types (when enabled)
    #[cfg(feature = "client")]
    pub use crate::client::{ClientError, SyncClient, SyncPhase, SyncUpdate};
}

// Re-export commonly used items at crate root
pub use crate::core::{Item, ItemDraft, ItemId, Keyed, ValidationError};
pub use crate::sync::{ApplyOutcome, Collection, EventError, ListEvent};

#[cfg(feature = "channel")]
pub use crate::channel::{ChannelConnection, ChannelError};

#[cfg(feature = "gateway")]
pub use crate::gateway::{GatewayConfig, MutationGateway, RequestOutcome};

#[cfg(feature = "client")]
pub use crate::client::{SyncClient, SyncUpdate};
