//! # Inbound Ports (Driving Ports / API)
//!
//! The per-signature facade every container backend exposes.

use crate::domain::{SignatureError, SignatureMetadata, X509Cert};
use chrono::{DateTime, Utc};
use shared_types::SignatureProfile;
use sv_01_trust_time::resolve_trusted_signing_time;
use sv_02_validation_report::{Aggregator, ReportLayer, ScopedLayer, ValidationResult};

/// One signature of a container.
///
/// Implementations supply the parsed metadata and the report layers their
/// validation engine produced. Everything else is derived.
pub trait Signature: Send + Sync {
    fn metadata(&self) -> &SignatureMetadata;

    /// Report layers carrying this signature, outermost first.
    ///
    /// Engine reports may also cover sibling signatures of the container.
    fn report_layers(&self) -> Vec<&dyn ReportLayer>;

    /// `report_layers()` narrowed to this signature's id.
    fn scoped_layers(&self) -> Vec<ScopedLayer<'_, dyn ReportLayer + '_>> {
        let signature_id = self.id();
        self.report_layers()
            .into_iter()
            .map(|layer| ScopedLayer::new(layer, signature_id))
            .collect()
    }

    /// Validate with the default report configuration.
    fn validate_signature(&self) -> Result<ValidationResult, SignatureError> {
        self.validate_with(&Aggregator::default())
    }

    /// Validate through a caller-supplied aggregator.
    ///
    /// Only this signature's issues and indication end up in the result.
    fn validate_with(&self, aggregator: &Aggregator) -> Result<ValidationResult, SignatureError> {
        Ok(aggregator.aggregate(&self.scoped_layers())?)
    }

    fn id(&self) -> &str {
        &self.metadata().id
    }

    fn profile(&self) -> SignatureProfile {
        self.metadata().profile
    }

    /// The signer's claimed time. Not trusted.
    fn claimed_signing_time(&self) -> Option<DateTime<Utc>> {
        self.metadata().claimed_signing_time
    }

    /// Trusted signing time resolved from the profile's time evidence.
    ///
    /// `None` for `B_BES` and whenever the required evidence is missing.
    fn trusted_signing_time(&self) -> Option<DateTime<Utc>> {
        let metadata = self.metadata();
        resolve_trusted_signing_time(metadata.profile, &metadata.time_evidence())
    }

    fn ocsp_nonce(&self) -> Option<&[u8]> {
        self.metadata().ocsp_nonce.as_deref()
    }

    fn signing_certificate(&self) -> Option<&X509Cert> {
        self.metadata().signing_certificate.as_ref()
    }
}
