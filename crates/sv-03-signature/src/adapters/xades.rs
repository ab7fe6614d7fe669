//! # XAdES Signature Adapter
//!
//! A BDOC/ASiC-E signature validated by the layered XAdES engine.

use crate::domain::SignatureMetadata;
use crate::ports::Signature;
use serde::{Deserialize, Serialize};
use sv_02_validation_report::{ReportChain, ReportLayer, SimpleReport};

/// Signature backed by a chain of simple reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XadesSignature {
    pub metadata: SignatureMetadata,
    #[serde(default)]
    pub reports: ReportChain,
}

impl XadesSignature {
    pub fn new(metadata: SignatureMetadata, reports: ReportChain) -> Self {
        Self { metadata, reports }
    }

    /// Signature with a single report layer.
    pub fn with_report(metadata: SignatureMetadata, report: SimpleReport) -> Self {
        Self::new(metadata, ReportChain::single(report))
    }
}

impl Signature for XadesSignature {
    fn metadata(&self) -> &SignatureMetadata {
        &self.metadata
    }

    fn report_layers(&self) -> Vec<&dyn ReportLayer> {
        self.reports
            .layers()
            .iter()
            .map(|layer| layer as &dyn ReportLayer)
            .collect()
    }
}
