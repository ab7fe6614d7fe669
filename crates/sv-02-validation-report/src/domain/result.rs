//! # Validation Result
//!
//! Immutable outcome of aggregating a report chain. Only the aggregator
//! constructs it; afterwards no issue or record can be added or removed, so
//! a shared reference is safe to read from any number of threads.

use super::audit::AuditDocument;
use super::entities::{IndicationRecord, ValidationIssue};
use serde::{Deserialize, Serialize};
use shared_types::SignatureId;
use std::collections::HashMap;

/// Aggregated errors, warnings, indications and audit document.
///
/// Invariants:
/// - `is_valid() == errors.is_empty()`
/// - one `IndicationRecord` per signature id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub(crate) errors: Vec<ValidationIssue>,
    pub(crate) warnings: Vec<ValidationIssue>,
    /// Signature ids in order of first appearance
    pub(crate) signature_order: Vec<SignatureId>,
    pub(crate) indications: HashMap<SignatureId, IndicationRecord>,
    pub(crate) audit: AuditDocument,
}

impl ValidationResult {
    /// Signature ids in the order they were first encountered.
    pub fn signature_ids(&self) -> &[SignatureId] {
        &self.signature_order
    }

    /// Id of the first signature encountered, the target of id-less lookups.
    pub fn primary_signature_id(&self) -> Option<&str> {
        self.signature_order.first().map(String::as_str)
    }

    /// Record for `signature_id`, or for the primary signature when `None`.
    ///
    /// A missing id and a result without signatures both yield `None`.
    pub fn indication_record(&self, signature_id: Option<&str>) -> Option<&IndicationRecord> {
        let id = match signature_id {
            Some(id) => id,
            None => self.primary_signature_id()?,
        };
        self.indications.get(id)
    }

    /// Errors attributed to one signature.
    pub fn errors_for(&self, signature_id: &str) -> Vec<&ValidationIssue> {
        issues_for(&self.errors, signature_id)
    }

    /// Warnings attributed to one signature.
    pub fn warnings_for(&self, signature_id: &str) -> Vec<&ValidationIssue> {
        issues_for(&self.warnings, signature_id)
    }

    /// The audit tree backing `report()`.
    pub fn audit_document(&self) -> &AuditDocument {
        &self.audit
    }

    /// Serializable overview of this result.
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            valid: self.errors.is_empty(),
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
            signatures: self
                .signature_order
                .iter()
                .filter_map(|id| self.indications.get(id).cloned())
                .collect(),
        }
    }
}

fn issues_for<'a>(issues: &'a [ValidationIssue], signature_id: &str) -> Vec<&'a ValidationIssue> {
    issues
        .iter()
        .filter(|issue| issue.signature_id.as_deref() == Some(signature_id))
        .collect()
}

/// Plain-data view of a `ValidationResult`, used for JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    /// Records in signature order
    pub signatures: Vec<IndicationRecord>,
}
