//! Push channel subscription connection.
//!
//! A [`ChannelConnection`] is an explicit, long-lived object with an
//! open/close lifecycle. There is no process-wide channel handle; whoever
//! needs the subscription owns the connection.

use std::net::SocketAddr;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpStream;

use crate::sync::ListEvent;

use super::codec::EventCodec;
use super::error::ChannelError;

/// Connection lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPhase {
    /// Subscription live, events flowing.
    Subscribed,
    /// Peer ended the stream; no more events until a fresh subscription.
    Ended,
    /// Closed locally.
    Closed,
}

/// A long-lived push channel subscription.
///
/// Owns the underlying byte stream. On a fresh subscription the authority
/// sends a snapshot first, then incremental events as mutations happen.
/// Connection loss simply ends the event stream: there is no fallback
/// polling, and re-establishing is the caller's move. A new subscription
/// begins with a new snapshot, which self-heals anything missed.
#[derive(Debug)]
pub struct ChannelConnection<S> {
    lines: Lines<BufReader<S>>,
    phase: ChannelPhase,
}

impl ChannelConnection<TcpStream> {
    /// Establish a subscription to the authority's push channel.
    pub async fn open(addr: SocketAddr) -> Result<Self, ChannelError> {
        let stream = TcpStream::connect(addr).await?;
        log::debug!("push channel subscribed to {addr}");
        Ok(Self::from_stream(stream))
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> ChannelConnection<S> {
    /// Wrap an established stream.
    ///
    /// Useful when the stream comes from somewhere other than a TCP connect,
    /// such as an in-memory duplex in tests.
    pub fn from_stream(stream: S) -> Self {
        Self {
            lines: BufReader::new(stream).lines(),
            phase: ChannelPhase::Subscribed,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ChannelPhase {
        self.phase
    }

    /// Receive the next event, in arrival order.
    ///
    /// Returns `Ok(None)` once the peer has ended the stream. A decode
    /// failure ([`ChannelError::BadFrame`]) leaves the subscription usable;
    /// the caller decides whether to tolerate the frame or tear down.
    ///
    /// Cancel-safe: dropping the future between frames loses no data, so
    /// this can sit in a `select!` arm.
    pub async fn next_event(&mut self) -> Result<Option<ListEvent>, ChannelError> {
        match self.phase {
            ChannelPhase::Subscribed => {}
            ChannelPhase::Ended => return Ok(None),
            ChannelPhase::Closed => return Err(ChannelError::Closed),
        }

        let Some(line) = self.lines.next_line().await? else {
            self.phase = ChannelPhase::Ended;
            log::debug!("push channel ended by peer");
            return Ok(None);
        };

        Ok(Some(EventCodec::decode(&line)?))
    }

    /// Tear down the subscription.
    ///
    /// Shuts the stream down and marks the connection closed; any later
    /// `next_event` returns [`ChannelError::Closed`]. A peer that already
    /// disconnected is not an error here.
    pub async fn close(&mut self) -> Result<(), ChannelError> {
        if self.phase != ChannelPhase::Closed {
            match self.lines.get_mut().get_mut().shutdown().await {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotConnected => {}
                Err(err) => return Err(err.into()),
            }
            self.phase = ChannelPhase::Closed;
            log::debug!("push channel closed");
        }
        Ok(())
    }
}
