//! # Single-Signature View
//!
//! A container's engine report covers every signature of the container.
//! `ScopedLayer` narrows one layer to a single signature id so that the
//! aggregator sees only that signature's issues, record and audit nodes.

use crate::domain::{AuditNode, IndicationRecord, ReportConfig, ReportError, ValidationIssue};
use crate::ports::ReportLayer;
use shared_types::SignatureId;

/// A report layer restricted to one signature.
///
/// A layer that does not mention the signature contributes nothing.
#[derive(Debug)]
pub struct ScopedLayer<'a, L: ?Sized> {
    layer: &'a L,
    signature_id: &'a str,
}

impl<'a, L: ReportLayer + ?Sized> ScopedLayer<'a, L> {
    pub fn new(layer: &'a L, signature_id: &'a str) -> Self {
        Self {
            layer,
            signature_id,
        }
    }

    fn ensure_in_scope(&self, signature_id: &str) -> Result<(), ReportError> {
        if signature_id == self.signature_id {
            Ok(())
        } else {
            Err(ReportError::MissingConclusion(signature_id.to_string()))
        }
    }
}

impl<L: ReportLayer + ?Sized> ReportLayer for ScopedLayer<'_, L> {
    /// Every occurrence of the scoped id is kept, so a layer listing it
    /// twice is still rejected as malformed.
    fn signature_ids(&self) -> Vec<SignatureId> {
        self.layer
            .signature_ids()
            .into_iter()
            .filter(|id| id == self.signature_id)
            .collect()
    }

    fn errors_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError> {
        self.ensure_in_scope(signature_id)?;
        self.layer.errors_for(signature_id)
    }

    fn warnings_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError> {
        self.ensure_in_scope(signature_id)?;
        self.layer.warnings_for(signature_id)
    }

    fn indication_for(&self, signature_id: &str) -> Result<IndicationRecord, ReportError> {
        self.ensure_in_scope(signature_id)?;
        self.layer.indication_for(signature_id)
    }

    fn audit_fragment_for(
        &self,
        signature_id: &str,
        config: &ReportConfig,
    ) -> Result<Vec<AuditNode>, ReportError> {
        self.ensure_in_scope(signature_id)?;
        self.layer.audit_fragment_for(signature_id, config)
    }
}
