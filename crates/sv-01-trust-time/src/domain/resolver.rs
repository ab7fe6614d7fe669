//! # Trusted Signing Time Resolution
//!
//! Decision table over `SignatureProfile`. Evaluated fresh on every call,
//! deterministic and side-effect free.

use super::evidence::TimeEvidence;
use chrono::{DateTime, Utc};
use shared_types::SignatureProfile;
use tracing::trace;

/// Where a profile takes its trusted time from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrustTimeSource {
    /// The profile carries no independent time evidence.
    None,
    /// Creation time of the embedded OCSP response (time-mark).
    OcspResponse,
    /// Creation time of the embedded timestamp token.
    TimestampToken,
}

/// The table row for `profile`.
pub fn trust_time_source(profile: SignatureProfile) -> TrustTimeSource {
    match profile {
        SignatureProfile::BBes => TrustTimeSource::None,
        SignatureProfile::LtTm => TrustTimeSource::OcspResponse,
        SignatureProfile::Lt | SignatureProfile::Lta => TrustTimeSource::TimestampToken,
    }
}

/// Resolve the trusted signing time of a signature.
///
/// Returns `None` for `B_BES`, and for any profile whose required evidence
/// is absent. Evidence not matching the profile's source is ignored, so a
/// `B_BES` signature stays untimed even if a timestamp happens to be present.
pub fn resolve_trusted_signing_time(
    profile: SignatureProfile,
    evidence: &TimeEvidence,
) -> Option<DateTime<Utc>> {
    let source = trust_time_source(profile);
    let resolved = match source {
        TrustTimeSource::None => None,
        TrustTimeSource::OcspResponse => evidence.ocsp_response_creation_time,
        TrustTimeSource::TimestampToken => evidence.timestamp_creation_time,
    };

    trace!(
        profile = %profile,
        source = ?source,
        resolved = ?resolved,
        "Resolved trusted signing time"
    );

    resolved
}
