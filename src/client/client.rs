//! Sync client: a subscriber keeping a local mirror of the shared list.
//!
//! `SyncClient` ties a push channel connection to a [`Collection`], applying
//! each incoming event in arrival order. It has no side effects beyond
//! mutating its own collection and issues no mutation requests; those go
//! through the [`gateway`](crate::gateway), and their effects come back here
//! as broadcast events.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

use crate::channel::{ChannelConnection, ChannelError};
use crate::core::{Item, ItemId};
use crate::sync::{ApplyOutcome, Collection, ListEvent};

/// Errors that can occur in the sync client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The push channel failed underneath the client.
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Sync lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Subscribed, waiting for the initial snapshot.
    AwaitingSnapshot,
    /// Initial snapshot applied; mirror is live.
    Live,
    /// Subscription ended or closed.
    Closed,
}

/// One applied event and what it did to the mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncUpdate {
    /// The event as it arrived on the channel.
    pub event: ListEvent,
    /// What applying it did to the collection.
    pub outcome: ApplyOutcome,
}

/// A subscriber keeping a local ordered mirror of the authority's list.
///
/// All mutation of the mirror happens from the task driving
/// [`next_change`](Self::next_change), in event arrival order, so no locking
/// is involved. Concurrent mutations by other clients are serialized by the
/// authority's broadcast: the last applied event wins for any given
/// identifier.
///
/// # Example
///
/// ```no_run
/// use shelfsync::client::SyncClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = SyncClient::connect("127.0.0.1:4001".parse()?).await?;
///
/// while let Some(update) = client.next_change().await? {
///     println!("{}: now {} records", update.event.kind(), client.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct SyncClient<S> {
    conn: ChannelConnection<S>,
    list: Collection<Item>,
    phase: SyncPhase,
}

impl SyncClient<TcpStream> {
    /// Subscribe to the authority's push channel at `addr`.
    pub async fn connect(addr: SocketAddr) -> Result<Self, ClientError> {
        Ok(Self::subscribe(ChannelConnection::open(addr).await?))
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> SyncClient<S> {
    /// Start a client over an established subscription.
    ///
    /// The collection starts empty; the snapshot the authority sends first
    /// on a fresh subscription replaces it wholesale.
    pub fn subscribe(conn: ChannelConnection<S>) -> Self {
        Self {
            conn,
            list: Collection::new(),
            phase: SyncPhase::AwaitingSnapshot,
        }
    }

    /// Apply the next event from the channel.
    ///
    /// Events are applied in the order they arrive; no reordering or
    /// buffering is performed, so whatever ordering the transport provides
    /// is what the mirror sees. Returns `Ok(None)` once the subscription has
    /// ended; [`resubscribe`](Self::resubscribe) with a fresh connection,
    /// and its snapshot will self-heal anything missed during the outage.
    ///
    /// Malformed frames are tolerated: logged and skipped without ending the
    /// subscription.
    pub async fn next_change(&mut self) -> Result<Option<SyncUpdate>, ClientError> {
        loop {
            let event = match self.conn.next_event().await {
                Ok(Some(event)) => event,
                Ok(None) => {
                    self.phase = SyncPhase::Closed;
                    return Ok(None);
                }
                Err(ChannelError::BadFrame(err)) => {
                    log::warn!("skipping malformed channel frame: {err}");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if self.phase == SyncPhase::AwaitingSnapshot {
                if event.is_snapshot() {
                    self.phase = SyncPhase::Live;
                } else {
                    // Tolerated: still applied in arrival order.
                    log::warn!("{} event before initial snapshot", event.kind());
                }
            }

            let outcome = self.list.apply(&event);
            return Ok(Some(SyncUpdate { event, outcome }));
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Whether the initial snapshot has been applied.
    pub fn is_initialized(&self) -> bool {
        self.phase == SyncPhase::Live
    }

    /// The mirrored records, in authority order.
    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    /// Look up one record, the edit-prefill path for a form surface.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.list.get(id)
    }

    /// Number of records mirrored.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the mirror holds no records.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Borrow the mirror as a collection.
    pub fn collection(&self) -> &Collection<Item> {
        &self.list
    }

    /// Swap in a fresh connection after an outage.
    ///
    /// Missed events are not replayed. The stale mirror is kept visible
    /// until the new subscription's snapshot arrives and replaces it
    /// wholesale. The previous connection is dropped.
    pub fn resubscribe(&mut self, conn: ChannelConnection<S>) {
        self.conn = conn;
        self.phase = SyncPhase::AwaitingSnapshot;
        log::debug!("resubscribed; awaiting fresh snapshot");
    }

    /// Tear down the subscription.
    pub async fn close(&mut self) -> Result<(), ClientError> {
        self.conn.close().await?;
        self.phase = SyncPhase::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::EventCodec;
    use tokio::io::{AsyncWriteExt, DuplexStream, duplex};

    fn book(id: ItemId, name: &str, price: f64) -> Item {
        Item::new(id, name, "Herbert", price)
    }

    async fn send(authority: &mut DuplexStream, event: &ListEvent) {
        let line = EventCodec::encode(event).unwrap();
        authority.write_all(line.as_bytes()).await.unwrap();
    }

    fn harness() -> (DuplexStream, SyncClient<DuplexStream>) {
        let (authority, subscriber) = duplex(16 * 1024);
        let client = SyncClient::subscribe(ChannelConnection::from_stream(subscriber));
        (authority, client)
    }

    #[tokio::test]
    async fn test_snapshot_initializes_mirror() {
        let (mut authority, mut client) = harness();
        assert!(!client.is_initialized());

        send(&mut authority, &ListEvent::Snapshot(vec![book(1, "Dune", 12.0)])).await;

        let update = client.next_change().await.unwrap().unwrap();
        assert_eq!(update.outcome, ApplyOutcome::Replaced { len: 1 });
        assert!(client.is_initialized());
        assert_eq!(client.len(), 1);
    }

    #[tokio::test]
    async fn test_full_session_patches_mirror() {
        let (mut authority, mut client) = harness();

        send(&mut authority, &ListEvent::Snapshot(vec![book(1, "Dune", 12.0)])).await;
        send(&mut authority, &ListEvent::Created(book(2, "Hyperion", 9.5))).await;
        send(&mut authority, &ListEvent::Updated(book(1, "Dune2", 15.0))).await;
        send(&mut authority, &ListEvent::Deleted(2)).await;

        client.next_change().await.unwrap().unwrap();

        let created = client.next_change().await.unwrap().unwrap();
        assert_eq!(created.outcome, ApplyOutcome::Appended);
        assert_eq!(client.len(), 2);

        let updated = client.next_change().await.unwrap().unwrap();
        assert_eq!(updated.outcome, ApplyOutcome::Updated);
        assert_eq!(client.get(1).unwrap().name, "Dune2");
        assert_eq!(client.get(1).unwrap().price, 15.0);

        let deleted = client.next_change().await.unwrap().unwrap();
        assert_eq!(deleted.outcome, ApplyOutcome::Removed);
        assert_eq!(client.len(), 1);
        assert!(client.get(2).is_none());
    }

    #[tokio::test]
    async fn test_incremental_before_snapshot_is_applied() {
        let (mut authority, mut client) = harness();

        send(&mut authority, &ListEvent::Created(book(5, "Dune", 12.0))).await;

        let update = client.next_change().await.unwrap().unwrap();
        assert_eq!(update.outcome, ApplyOutcome::Appended);
        assert_eq!(client.len(), 1);
        // Still waiting for the authority's snapshot.
        assert!(!client.is_initialized());
    }

    #[tokio::test]
    async fn test_malformed_frame_skipped() {
        let (mut authority, mut client) = harness();

        authority.write_all(b"garbage\n").await.unwrap();
        send(&mut authority, &ListEvent::Snapshot(vec![book(1, "Dune", 12.0)])).await;

        // The bad frame is swallowed; the next change is the snapshot.
        let update = client.next_change().await.unwrap().unwrap();
        assert!(update.event.is_snapshot());
        assert!(client.is_initialized());
    }

    #[tokio::test]
    async fn test_subscription_end_yields_none() {
        let (mut authority, mut client) = harness();

        send(&mut authority, &ListEvent::Snapshot(vec![book(1, "Dune", 12.0)])).await;
        client.next_change().await.unwrap().unwrap();

        drop(authority);

        assert!(client.next_change().await.unwrap().is_none());
        assert_eq!(client.phase(), SyncPhase::Closed);
        // The stale mirror stays visible until a resubscription snapshot.
        assert_eq!(client.len(), 1);
    }

    #[tokio::test]
    async fn test_resubscribe_self_heals_from_snapshot() {
        let (mut authority, mut client) = harness();

        send(&mut authority, &ListEvent::Snapshot(vec![book(1, "Dune", 12.0)])).await;
        client.next_change().await.unwrap().unwrap();
        drop(authority);
        assert!(client.next_change().await.unwrap().is_none());

        // Fresh subscription; the outage swallowed a delete and a create.
        let (mut authority2, subscriber2) = duplex(16 * 1024);
        client.resubscribe(ChannelConnection::from_stream(subscriber2));
        assert_eq!(client.phase(), SyncPhase::AwaitingSnapshot);

        send(
            &mut authority2,
            &ListEvent::Snapshot(vec![book(2, "Hyperion", 9.5), book(3, "Endymion", 11.0)]),
        )
        .await;

        let update = client.next_change().await.unwrap().unwrap();
        assert_eq!(update.outcome, ApplyOutcome::Replaced { len: 2 });
        assert!(client.get(1).is_none());
        assert!(client.get(2).is_some());
    }

    #[tokio::test]
    async fn test_close_tears_down() {
        let (_authority, mut client) = harness();
        client.close().await.unwrap();
        assert_eq!(client.phase(), SyncPhase::Closed);

        let result = client.next_change().await;
        assert!(matches!(
            result,
            Err(ClientError::Channel(ChannelError::Closed))
        ));
    }
}
