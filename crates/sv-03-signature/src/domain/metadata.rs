//! # Signature Metadata
//!
//! Everything the container parser extracted from one signature. The facade
//! only reads it; validation outcomes live in the report layers.

use super::certificate::X509Cert;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{SignatureId, SignatureProfile};
use sv_01_trust_time::TimeEvidence;

/// Signature production place. Absent parts are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionPlace {
    pub city: String,
    pub state_or_province: String,
    pub postal_code: String,
    pub country_name: String,
}

impl ProductionPlace {
    pub fn new(
        city: impl Into<String>,
        state_or_province: impl Into<String>,
        postal_code: impl Into<String>,
        country_name: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state_or_province: state_or_province.into(),
            postal_code: postal_code.into(),
            country_name: country_name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_empty()
            && self.state_or_province.is_empty()
            && self.postal_code.is_empty()
            && self.country_name.is_empty()
    }
}

/// Parsed attributes of one signature.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureMetadata {
    pub id: SignatureId,
    pub profile: SignatureProfile,
    /// Signing time claimed by the signer, not trusted
    #[serde(default)]
    pub claimed_signing_time: Option<DateTime<Utc>>,
    /// Signature algorithm URI
    #[serde(default)]
    pub signature_method: String,
    /// Policy identifier
    #[serde(default)]
    pub policy: String,
    #[serde(default)]
    pub signature_policy_uri: Option<String>,
    #[serde(default)]
    pub signing_certificate: Option<X509Cert>,
    #[serde(default)]
    pub ocsp_certificate: Option<X509Cert>,
    #[serde(default)]
    pub timestamp_token_certificate: Option<X509Cert>,
    #[serde(default)]
    pub ocsp_response_creation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub timestamp_creation_time: Option<DateTime<Utc>>,
    /// `producedAt` of the OCSP response as recorded in the signature
    #[serde(default)]
    pub produced_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<Hex>")]
    pub ocsp_nonce: Option<Vec<u8>>,
    #[serde(default)]
    pub signer_roles: Vec<String>,
    #[serde(default)]
    pub production_place: ProductionPlace,
}

impl SignatureMetadata {
    pub fn new(id: impl Into<SignatureId>, profile: SignatureProfile) -> Self {
        Self {
            id: id.into(),
            profile,
            claimed_signing_time: None,
            signature_method: String::new(),
            policy: String::new(),
            signature_policy_uri: None,
            signing_certificate: None,
            ocsp_certificate: None,
            timestamp_token_certificate: None,
            ocsp_response_creation_time: None,
            timestamp_creation_time: None,
            produced_at: None,
            ocsp_nonce: None,
            signer_roles: Vec::new(),
            production_place: ProductionPlace::default(),
        }
    }

    /// The time evidence the trust-time resolver works on.
    pub fn time_evidence(&self) -> TimeEvidence {
        TimeEvidence {
            ocsp_response_creation_time: self.ocsp_response_creation_time,
            timestamp_creation_time: self.timestamp_creation_time,
        }
    }

    pub fn with_claimed_signing_time(mut self, time: DateTime<Utc>) -> Self {
        self.claimed_signing_time = Some(time);
        self
    }

    pub fn with_signature_method(mut self, uri: impl Into<String>) -> Self {
        self.signature_method = uri.into();
        self
    }

    pub fn with_policy(mut self, policy: impl Into<String>, uri: Option<String>) -> Self {
        self.policy = policy.into();
        self.signature_policy_uri = uri;
        self
    }

    pub fn with_signing_certificate(mut self, cert: X509Cert) -> Self {
        self.signing_certificate = Some(cert);
        self
    }

    /// Embedded OCSP response: responder certificate and creation time.
    pub fn with_ocsp_response(mut self, cert: Option<X509Cert>, created: DateTime<Utc>) -> Self {
        self.ocsp_certificate = cert;
        self.ocsp_response_creation_time = Some(created);
        self.produced_at = Some(created);
        self
    }

    /// Embedded timestamp token: TSA certificate and creation time.
    pub fn with_timestamp(mut self, cert: Option<X509Cert>, created: DateTime<Utc>) -> Self {
        self.timestamp_token_certificate = cert;
        self.timestamp_creation_time = Some(created);
        self
    }

    pub fn with_ocsp_nonce(mut self, nonce: Vec<u8>) -> Self {
        self.ocsp_nonce = Some(nonce);
        self
    }

    pub fn with_signer_role(mut self, role: impl Into<String>) -> Self {
        self.signer_roles.push(role.into());
        self
    }

    pub fn with_production_place(mut self, place: ProductionPlace) -> Self {
        self.production_place = place;
        self
    }
}
