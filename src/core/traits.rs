//! Core trait for records the sync layer can reconcile.

use super::item::ItemId;

/// A record with a stable, authority-assigned integer identity.
///
/// The reconciliation layer is generic over this trait: anything carrying a
/// key that is unique within the list and stable for the lifetime of the
/// record can live in a [`Collection`](crate::sync::Collection) and be
/// patched by incremental events.
///
/// # Requirements
///
/// - The key MUST NOT change for the lifetime of the record
/// - Two live records MUST NOT share a key
///
/// # Example
///
/// ```rust
/// use shelfsync::core::{ItemId, Keyed};
///
/// struct Shelf {
///     id: ItemId,
///     label: String,
/// }
///
/// impl Keyed for Shelf {
///     fn key(&self) -> ItemId {
///         self.id
///     }
/// }
/// ```
pub trait Keyed {
    /// The record's identity within the shared list.
    fn key(&self) -> ItemId;
}
