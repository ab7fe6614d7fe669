//! # Outbound Ports (Driven Ports / SPI)
//!
//! The normalization interface. Each report backend implements it once;
//! the aggregator depends only on this trait.

use crate::domain::{AuditNode, IndicationRecord, ReportConfig, ReportError, ValidationIssue};
use shared_types::SignatureId;

/// One layer of a validation report, seen through the neutral vocabulary.
///
/// Implementations only read the underlying report and must return the
/// same values on every call.
pub trait ReportLayer {
    /// Signature ids present in this layer, in report order.
    ///
    /// An empty list is legitimate: the layer then contributes nothing.
    fn signature_ids(&self) -> Vec<SignatureId>;

    /// Errors attributed to `signature_id`, in report order.
    ///
    /// # Errors
    /// * `ReportError::MissingConclusion` - the id is not reported by this layer
    fn errors_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError>;

    /// Warnings attributed to `signature_id`, in report order.
    fn warnings_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError>;

    /// Indication record for `signature_id`.
    fn indication_for(&self, signature_id: &str) -> Result<IndicationRecord, ReportError>;

    /// Nodes copied into the per-signature audit sub-tree of `signature_id`.
    ///
    /// Returned nodes are owned copies, independent of the source report.
    fn audit_fragment_for(
        &self,
        signature_id: &str,
        config: &ReportConfig,
    ) -> Result<Vec<AuditNode>, ReportError>;
}
