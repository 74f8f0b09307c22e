//! Inventory record types.

use serde::{Deserialize, Serialize};

use super::error::{ValidationError, ValidationIssue};
use super::traits::Keyed;

/// Identifier assigned to a record by the remote authority.
///
/// Never assigned by the client. Absent until the authority confirms a
/// creation; positive for every live record.
pub type ItemId = i64;

/// One inventory record, as the authority broadcasts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Authority-assigned identifier, stable for the record's lifetime.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Owner or author of the record.
    pub owner: String,
    /// Non-negative price.
    pub price: f64,
}

impl Item {
    /// Create a record from its parts.
    pub fn new(id: ItemId, name: impl Into<String>, owner: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            owner: owner.into(),
            price,
        }
    }

    /// The client-authored fields of this record.
    ///
    /// This is the edit-prefill path: a form surface loads an existing record
    /// into its inputs, edits, and sends the result back as an update.
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            owner: self.owner.clone(),
            price: self.price,
        }
    }
}

impl Keyed for Item {
    fn key(&self) -> ItemId {
        self.id
    }
}

/// The client-authored fields of a record.
///
/// A draft carries no identifier; the authority assigns one on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Display name.
    pub name: String,
    /// Owner or author of the record.
    pub owner: String,
    /// Non-negative price.
    pub price: f64,
}

impl ItemDraft {
    /// Create a draft from its parts.
    pub fn new(name: impl Into<String>, owner: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            price,
        }
    }

    /// Run the presence/sign checks.
    ///
    /// Reports every failed check at once. Performed before any mutation
    /// request is sent; nothing goes on the wire for an invalid draft.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        if self.name.is_empty() {
            issues.push(ValidationIssue::MissingName);
        }
        if self.owner.is_empty() {
            issues.push(ValidationIssue::MissingOwner);
        }
        if self.price < 0.0 {
            issues.push(ValidationIssue::NegativePrice);
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(issues))
        }
    }
}
