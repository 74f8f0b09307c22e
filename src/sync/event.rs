//! Channel event model.
//!
//! Wire shape: one JSON object per frame, `{"event": "<kind>", "data": ...}`.
//! The kind names are fixed by the authority (see
//! [`core::constants`](crate::core)).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{
    EVENT_CREATED, EVENT_DELETED, EVENT_SNAPSHOT, EVENT_UPDATED, Item, ItemId,
};

/// Errors decoding or encoding a channel frame.
#[derive(Debug, Error)]
pub enum EventError {
    /// Frame is not valid JSON, or not a known event shape.
    #[error("invalid event frame: {0}")]
    Invalid(#[from] serde_json::Error),

    /// Frame exceeds the accepted size bound.
    #[error("event frame too large: {size} bytes (limit {limit})")]
    FrameTooLarge {
        /// Size of the rejected frame.
        size: usize,
        /// The configured bound.
        limit: usize,
    },
}

/// A mutation event delivered on the push channel.
///
/// The first event on a fresh subscription is a [`Snapshot`](Self::Snapshot)
/// carrying the authority's full list; every later event describes a single
/// mutation. Events are applied in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ListEvent<T = Item> {
    /// Full current list state; replaces the local collection wholesale.
    Snapshot(Vec<T>),
    /// A record the authority just created, with its assigned identifier.
    Created(T),
    /// The new contents of an existing record.
    Updated(T),
    /// Identifier of a removed record.
    Deleted(ItemId),
}

impl<T> ListEvent<T> {
    /// The event kind name as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Snapshot(_) => EVENT_SNAPSHOT,
            Self::Created(_) => EVENT_CREATED,
            Self::Updated(_) => EVENT_UPDATED,
            Self::Deleted(_) => EVENT_DELETED,
        }
    }

    /// Whether this is the wholesale-replacement event.
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Snapshot(_))
    }
}
