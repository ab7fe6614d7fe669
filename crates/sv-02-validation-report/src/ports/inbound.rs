//! # Inbound Ports (Driving Ports / API)
//!
//! The `ValidationResult` contract callers query.

use crate::domain::{ValidationIssue, ValidationResult};
use shared_types::{Indication, SignatureQualification, SubIndication};

/// Query surface of an aggregated validation result.
///
/// `is_valid()` and the issue lists are the programmatic source of truth;
/// `report()` is an audit artifact.
///
/// ## Primary signature convenience
///
/// The per-signature lookups take `Option<&str>`. Passing `None` means
/// "the first signature encountered during aggregation". If the result
/// has no signatures, or the given id is not present, the lookup returns
/// `None` rather than failing.
pub trait ValidationResultApi {
    /// All errors, in layer order then signature order. Empty when none.
    fn errors(&self) -> &[ValidationIssue];

    /// All warnings, in layer order then signature order. Empty when none.
    fn warnings(&self) -> &[ValidationIssue];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings().is_empty()
    }

    /// Valid exactly when there are no errors. Warnings do not count.
    fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    fn indication(&self, signature_id: Option<&str>) -> Option<Indication>;

    fn sub_indication(&self, signature_id: Option<&str>) -> Option<SubIndication>;

    fn qualification(&self, signature_id: Option<&str>) -> Option<SignatureQualification>;

    /// The rendered XML audit report.
    fn report(&self) -> String;
}

impl ValidationResultApi for ValidationResult {
    fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    fn indication(&self, signature_id: Option<&str>) -> Option<Indication> {
        self.indication_record(signature_id)
            .map(|record| record.indication)
    }

    fn sub_indication(&self, signature_id: Option<&str>) -> Option<SubIndication> {
        self.indication_record(signature_id)
            .and_then(|record| record.sub_indication)
    }

    fn qualification(&self, signature_id: Option<&str>) -> Option<SignatureQualification> {
        self.indication_record(signature_id)
            .map(|record| record.qualification)
    }

    fn report(&self) -> String {
        self.audit.render()
    }
}
