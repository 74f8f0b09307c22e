//! Local collection reconciliation.
//!
//! A [`Collection`] is each client's mirror of the authority's list. It is
//! replaced wholesale by a snapshot and patched in place by incremental
//! events, in the order they arrive. Application is idempotent per event, so
//! a re-delivered event leaves the collection as if applied once.

use crate::core::{ItemId, Keyed};

use super::event::ListEvent;

/// What applying one event did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Snapshot replaced the collection wholesale.
    Replaced {
        /// Length of the collection after replacement.
        len: usize,
    },
    /// Created record appended at the tail.
    Appended,
    /// Existing record replaced in place.
    Updated,
    /// Record removed.
    Removed,
    /// Event referenced an absent key; collection unchanged.
    NoOp,
}

/// Ordered sequence of records mirroring the authority's list.
///
/// Exclusively owned by the holder; nothing is shared across clients except
/// through the synchronization protocol itself. Invariant: no two records
/// share a key, for every sequence of incremental events applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// Create an empty collection, awaiting its first snapshot.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The records in authority order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the records in authority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Keyed + Clone> Collection<T> {
    /// Build a collection directly from a snapshot payload.
    ///
    /// The authority's snapshot is taken as-is; it is the source of truth
    /// for both content and order.
    pub fn from_snapshot(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Position of the record with the given key, if present.
    fn position(&self, key: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Look up a record by key.
    pub fn get(&self, key: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Whether a record with the given key is present.
    pub fn contains(&self, key: ItemId) -> bool {
        self.position(key).is_some()
    }

    /// Apply one event and report what it did.
    ///
    /// Reconciliation rules:
    /// - `snapshot`: replace the collection entirely
    /// - `created`: append; if the key is already present, replace in place
    ///   (re-delivery of a create must not duplicate the record)
    /// - `updated`: replace the record with the matching key; no-op if absent
    /// - `deleted`: remove the record with the matching key; no-op if absent
    ///
    /// Applying the same incremental event twice yields the same end state
    /// as applying it once.
    pub fn apply(&mut self, event: &ListEvent<T>) -> ApplyOutcome {
        match event {
            ListEvent::Snapshot(items) => {
                self.items = items.clone();
                ApplyOutcome::Replaced {
                    len: self.items.len(),
                }
            }
            ListEvent::Created(item) => match self.position(item.key()) {
                Some(at) => {
                    self.items[at] = item.clone();
                    ApplyOutcome::Updated
                }
                None => {
                    self.items.push(item.clone());
                    ApplyOutcome::Appended
                }
            },
            ListEvent::Updated(item) => match self.position(item.key()) {
                Some(at) => {
                    self.items[at] = item.clone();
                    ApplyOutcome::Updated
                }
                None => ApplyOutcome::NoOp,
            },
            ListEvent::Deleted(key) => match self.position(*key) {
                Some(at) => {
                    self.items.remove(at);
                    ApplyOutcome::Removed
                }
                None => ApplyOutcome::NoOp,
            },
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
