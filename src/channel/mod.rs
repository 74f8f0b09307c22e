//! Push channel transport.
//!
//! This module carries the subscription side of the protocol. It provides:
//!
//! - **Frame codec**: [`EventCodec`], newline-delimited JSON event frames
//! - **Subscription connection**: [`ChannelConnection`] with an explicit
//!   open/close lifecycle
//!
//! # Architecture
//!
//! The channel sits between the byte stream and the sync layer. It frames
//! and decodes events while remaining agnostic to how they are applied.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Sync Client                  │
//! ├─────────────────────────────────────────┤
//! │            Channel                      │  ← This module
//! │      frames, subscription lifecycle     │
//! ├─────────────────────────────────────────┤
//! │            TCP / byte stream            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The connection is subscribe-only: events flow from the authority to the
//! client. Mutations travel the other way through the
//! [`gateway`](crate::gateway), and their effects come back as events here.

mod codec;
mod connection;
mod error;

pub use codec::*;
pub use connection::*;
pub use error::*;
