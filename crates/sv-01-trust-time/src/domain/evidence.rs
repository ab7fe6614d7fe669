//! # Time Evidence
//!
//! The independent time evidence a signature may carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time evidence extracted from a signature by its container parser.
///
/// Both fields are optional: a signature that was never time-marked or
/// time-stamped simply has no evidence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvidence {
    /// `producedAt` of the embedded OCSP response.
    #[serde(default)]
    pub ocsp_response_creation_time: Option<DateTime<Utc>>,
    /// `genTime` of the embedded signature or archive timestamp token.
    #[serde(default)]
    pub timestamp_creation_time: Option<DateTime<Utc>>,
}

impl TimeEvidence {
    /// Evidence with nothing embedded.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder-style method to set the OCSP response creation time
    pub fn with_ocsp_response(mut self, created: DateTime<Utc>) -> Self {
        self.ocsp_response_creation_time = Some(created);
        self
    }

    /// Builder-style method to set the timestamp token creation time
    pub fn with_timestamp(mut self, created: DateTime<Utc>) -> Self {
        self.timestamp_creation_time = Some(created);
        self
    }
}
