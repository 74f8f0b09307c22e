//! Mutation gateway.
//!
//! Request/response calls against the remote authority. Fire-and-forget by
//! design: the gateway reports whether a request went out and was accepted,
//! but truth about the list only ever arrives through the push channel.

#[allow(clippy::module_inception)]
mod gateway;

pub use gateway::*;
