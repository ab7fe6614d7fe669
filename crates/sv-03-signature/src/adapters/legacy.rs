//! # Legacy DigiDoc Signature Adapter

use crate::domain::SignatureMetadata;
use crate::ports::Signature;
use serde::{Deserialize, Serialize};
use sv_02_validation_report::{LegacyReport, ReportLayer};

/// Signature of a legacy DDOC container, validated by the legacy engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySignature {
    pub metadata: SignatureMetadata,
    #[serde(default)]
    pub report: LegacyReport,
}

impl LegacySignature {
    /// The report is re-keyed to the signature's own id.
    pub fn new(metadata: SignatureMetadata, report: LegacyReport) -> Self {
        let report = LegacyReport {
            signature_id: metadata.id.clone(),
            ..report
        };
        Self { metadata, report }
    }
}

impl Signature for LegacySignature {
    fn metadata(&self) -> &SignatureMetadata {
        &self.metadata
    }

    fn report_layers(&self) -> Vec<&dyn ReportLayer> {
        vec![&self.report]
    }
}
