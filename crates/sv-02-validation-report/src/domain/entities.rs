//! # Domain Entities
//!
//! The neutral vocabulary every report backend is normalized into.

use serde::{Deserialize, Serialize};
use shared_types::{Indication, SignatureId, SignatureQualification, SubIndication};
use std::fmt;

/// One validation error or warning.
///
/// Created by a report normalizer and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Message exactly as the validation engine rendered it
    pub message: String,
    /// Signature the issue is attributed to, if any
    pub signature_id: Option<SignatureId>,
}

impl ValidationIssue {
    /// An issue attributed to a signature.
    pub fn for_signature(message: impl Into<String>, signature_id: impl Into<SignatureId>) -> Self {
        Self {
            message: message.into(),
            signature_id: Some(signature_id.into()),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Indication, sub-indication and qualification of one signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicationRecord {
    pub signature_id: SignatureId,
    pub indication: Indication,
    pub sub_indication: Option<SubIndication>,
    pub qualification: SignatureQualification,
}
