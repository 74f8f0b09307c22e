//! Error types for draft validation.
//!
//! Validation is presence/sign checking only, performed client-side before a
//! mutation request is sent. Deeper input validation is the authority's
//! concern.

use thiserror::Error;

/// A single failed check on a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Name field is empty.
    #[error("name is required")]
    MissingName,

    /// Owner field is empty.
    #[error("owner is required")]
    MissingOwner,

    /// Price is negative.
    #[error("price must not be negative")]
    NegativePrice,
}

/// A draft failed its presence/sign checks.
///
/// Carries every failed check, not just the first, so a form surface can
/// show one combined notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid draft: {}", join_issues(.issues))]
pub struct ValidationError {
    /// The failed checks, in field order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Bundle failed checks into an error.
    ///
    /// Callers are expected to pass a non-empty list; an empty one still
    /// formats, it just names no issue.
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Whether a specific check failed.
    pub fn has(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_issue_message() {
        let err = ValidationError::new(vec![ValidationIssue::MissingName]);
        assert_eq!(err.to_string(), "invalid draft: name is required");
    }

    #[test]
    fn test_joined_issue_message() {
        let err = ValidationError::new(vec![
            ValidationIssue::MissingName,
            ValidationIssue::NegativePrice,
        ]);
        assert_eq!(
            err.to_string(),
            "invalid draft: name is required, price must not be negative"
        );
    }

    #[test]
    fn test_has() {
        let err = ValidationError::new(vec![ValidationIssue::MissingOwner]);
        assert!(err.has(ValidationIssue::MissingOwner));
        assert!(!err.has(ValidationIssue::NegativePrice));
    }
}
