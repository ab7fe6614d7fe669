//! # Certificates
//!
//! Certificates arrive already parsed by the container layer: the DER bytes
//! are carried opaquely, alongside the subject attributes the facade exposes.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use std::collections::BTreeMap;
use std::fmt;

/// Subject distinguished-name attributes exposed by `X509Cert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubjectName {
    #[serde(rename = "SERIALNUMBER")]
    SerialNumber,
    #[serde(rename = "GIVENNAME")]
    GivenName,
    #[serde(rename = "SURNAME")]
    Surname,
    #[serde(rename = "CN")]
    CommonName,
    #[serde(rename = "C")]
    Country,
    #[serde(rename = "O")]
    Organization,
    #[serde(rename = "OU")]
    OrganizationalUnit,
}

impl SubjectName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectName::SerialNumber => "SERIALNUMBER",
            SubjectName::GivenName => "GIVENNAME",
            SubjectName::Surname => "SURNAME",
            SubjectName::CommonName => "CN",
            SubjectName::Country => "C",
            SubjectName::Organization => "O",
            SubjectName::OrganizationalUnit => "OU",
        }
    }
}

impl fmt::Display for SubjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An X.509 certificate as seen by the facade.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct X509Cert {
    /// DER encoding, hex in serialized form
    #[serde_as(as = "Hex")]
    pub der: Vec<u8>,
    #[serde(default)]
    pub subject: BTreeMap<SubjectName, String>,
}

impl X509Cert {
    pub fn new(der: Vec<u8>) -> Self {
        Self {
            der,
            subject: BTreeMap::new(),
        }
    }

    /// Decode a hex-encoded DER certificate.
    pub fn from_hex(encoded: &str) -> Result<Self, SignatureError> {
        hex::decode(encoded.trim())
            .map(Self::new)
            .map_err(|e| SignatureError::InvalidCertificate(e.to_string()))
    }

    /// Builder-style method to set one subject attribute
    pub fn with_subject(mut self, name: SubjectName, value: impl Into<String>) -> Self {
        self.subject.insert(name, value.into());
        self
    }

    /// Value of a subject attribute, if present.
    pub fn subject_name(&self, name: SubjectName) -> Option<&str> {
        self.subject.get(&name).map(String::as_str)
    }

    /// Lowercase hex of the DER bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.der)
    }
}
