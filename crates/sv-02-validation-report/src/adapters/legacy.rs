//! # Legacy DigiDoc Report Adapter
//!
//! The legacy engine validates one signature per report and returns a flat
//! list of coded errors and warnings. There is no layering: a legacy report
//! is always a single layer with one implicit signature id.

use crate::domain::{
    AuditElement, AuditNode, IndicationRecord, ReportConfig, ReportError, ValidationIssue,
};
use crate::ports::ReportLayer;
use serde::{Deserialize, Serialize};
use shared_types::{Indication, SignatureId, SignatureQualification, SubIndication};
use std::fmt;

/// Signature id the legacy engine assigns to the first signature.
pub const DEFAULT_LEGACY_SIGNATURE_ID: &str = "S0";

fn default_signature_id() -> SignatureId {
    DEFAULT_LEGACY_SIGNATURE_ID.to_string()
}

/// One coded entry of the legacy engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyIssue {
    /// Numeric engine error code
    pub code: u32,
    pub message: String,
}

impl LegacyIssue {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The canonical string form; the only source of issue messages.
impl fmt::Display for LegacyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Flat report of the legacy engine for one signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyReport {
    #[serde(default = "default_signature_id")]
    pub signature_id: SignatureId,
    #[serde(default)]
    pub errors: Vec<LegacyIssue>,
    #[serde(default)]
    pub warnings: Vec<LegacyIssue>,
}

impl Default for LegacyReport {
    fn default() -> Self {
        Self::new(DEFAULT_LEGACY_SIGNATURE_ID)
    }
}

impl LegacyReport {
    pub fn new(signature_id: impl Into<SignatureId>) -> Self {
        Self {
            signature_id: signature_id.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_error(mut self, error: LegacyIssue) -> Self {
        self.errors.push(error);
        self
    }

    pub fn with_warning(mut self, warning: LegacyIssue) -> Self {
        self.warnings.push(warning);
        self
    }

    /// `TOTAL_PASSED` without errors, `TOTAL_FAILED` otherwise.
    pub fn indication(&self) -> Indication {
        if self.errors.is_empty() {
            Indication::TotalPassed
        } else {
            Indication::TotalFailed
        }
    }

    /// `FORMAT_FAILURE` whenever the engine reported errors.
    pub fn sub_indication(&self) -> Option<SubIndication> {
        if self.errors.is_empty() {
            None
        } else {
            Some(SubIndication::FormatFailure)
        }
    }

    fn ensure_known(&self, signature_id: &str) -> Result<(), ReportError> {
        if self.signature_id == signature_id {
            Ok(())
        } else {
            Err(ReportError::MissingConclusion(signature_id.to_string()))
        }
    }

    fn issues(&self, entries: &[LegacyIssue]) -> Vec<ValidationIssue> {
        entries
            .iter()
            .map(|entry| ValidationIssue::for_signature(entry.to_string(), self.signature_id.as_str()))
            .collect()
    }
}

impl ReportLayer for LegacyReport {
    fn signature_ids(&self) -> Vec<SignatureId> {
        vec![self.signature_id.clone()]
    }

    fn errors_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError> {
        self.ensure_known(signature_id)?;
        Ok(self.issues(&self.errors))
    }

    fn warnings_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError> {
        self.ensure_known(signature_id)?;
        Ok(self.issues(&self.warnings))
    }

    fn indication_for(&self, signature_id: &str) -> Result<IndicationRecord, ReportError> {
        self.ensure_known(signature_id)?;
        Ok(IndicationRecord {
            signature_id: self.signature_id.clone(),
            indication: self.indication(),
            sub_indication: self.sub_indication(),
            qualification: SignatureQualification::Na,
        })
    }

    fn audit_fragment_for(
        &self,
        signature_id: &str,
        config: &ReportConfig,
    ) -> Result<Vec<AuditNode>, ReportError> {
        self.ensure_known(signature_id)?;

        let mut signature = AuditElement::new("Signature")
            .with_attribute("Id", self.signature_id.as_str())
            .with_attribute("SignatureFormat", config.legacy_signature_format.as_str())
            .with_child(AuditElement::leaf("Indication", self.indication().as_str()));
        if let Some(sub_indication) = self.sub_indication() {
            signature =
                signature.with_child(AuditElement::leaf("SubIndication", sub_indication.as_str()));
        }
        for error in &self.errors {
            signature = signature.with_child(
                AuditElement::leaf("Error", error.message.as_str())
                    .with_attribute("Code", error.code.to_string()),
            );
        }
        for warning in &self.warnings {
            signature = signature.with_child(
                AuditElement::leaf("Warning", warning.message.as_str())
                    .with_attribute("Code", warning.code.to_string()),
            );
        }

        Ok(vec![signature.into()])
    }
}
