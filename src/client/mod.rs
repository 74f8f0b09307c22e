//! High-level sync client API.

#[allow(clippy::module_inception)]
mod client;

pub use client::*;
