//! Channel error types.

use thiserror::Error;

use crate::sync::EventError;

/// Errors on the push channel.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The underlying stream failed.
    #[error("channel i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A frame could not be decoded into an event.
    ///
    /// The subscription itself stays usable; the caller decides whether to
    /// tolerate the frame or tear down.
    #[error("bad frame: {0}")]
    BadFrame(#[from] EventError),

    /// The connection was already closed locally.
    #[error("channel closed")]
    Closed,
}
