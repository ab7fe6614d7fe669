//! # Core Domain Entities
//!
//! Defines the validation vocabulary produced by signature policy engines
//! and the signature profiles a container can carry.
//!
//! ## Clusters
//!
//! - **Validation outcome**: `Indication`, `SubIndication`, `SignatureQualification`
//! - **Signature shape**: `SignatureProfile`, `SignatureId`

use crate::errors::ParseVocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one signature inside a container (e.g. `S0`, `id-99E4...`).
pub type SignatureId = String;

/// Declares a closed vocabulary enum whose variants map one-to-one onto the
/// literals used in rendered reports.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The literal written into reports.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseVocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($name::$variant),)+
                    other => Err(ParseVocabularyError::new($kind, other)),
                }
            }
        }
    };
}

// =============================================================================
// CLUSTER A: VALIDATION OUTCOME
// =============================================================================

vocabulary! {
    /// Main status of a signature validation (ETSI EN 319 102-1).
    Indication, "indication" {
        /// All checks passed.
        TotalPassed => "TOTAL_PASSED",
        /// A building block passed.
        Passed => "PASSED",
        /// Not enough evidence to reach a conclusion.
        Indeterminate => "INDETERMINATE",
        /// A building block failed.
        Failed => "FAILED",
        /// The signature is definitely invalid.
        TotalFailed => "TOTAL_FAILED",
    }
}

vocabulary! {
    /// Refinement of an `INDETERMINATE` or `TOTAL_FAILED` indication.
    SubIndication, "sub-indication" {
        FormatFailure => "FORMAT_FAILURE",
        HashFailure => "HASH_FAILURE",
        SigCryptoFailure => "SIG_CRYPTO_FAILURE",
        Revoked => "REVOKED",
        SigConstraintsFailure => "SIG_CONSTRAINTS_FAILURE",
        ChainConstraintsFailure => "CHAIN_CONSTRAINTS_FAILURE",
        CertificateChainGeneralFailure => "CERTIFICATE_CHAIN_GENERAL_FAILURE",
        CryptoConstraintsFailure => "CRYPTO_CONSTRAINTS_FAILURE",
        Expired => "EXPIRED",
        NotYetValid => "NOT_YET_VALID",
        PolicyProcessingError => "POLICY_PROCESSING_ERROR",
        SignaturePolicyNotAvailable => "SIGNATURE_POLICY_NOT_AVAILABLE",
        TimestampOrderFailure => "TIMESTAMP_ORDER_FAILURE",
        NoSigningCertificateFound => "NO_SIGNING_CERTIFICATE_FOUND",
        NoCertificateChainFound => "NO_CERTIFICATE_CHAIN_FOUND",
        RevokedNoPoe => "REVOKED_NO_POE",
        RevokedCaNoPoe => "REVOKED_CA_NO_POE",
        OutOfBoundsNoPoe => "OUT_OF_BOUNDS_NO_POE",
        CryptoConstraintsFailureNoPoe => "CRYPTO_CONSTRAINTS_FAILURE_NO_POE",
        NoPoe => "NO_POE",
        TryLater => "TRY_LATER",
        SignedDataNotFound => "SIGNED_DATA_NOT_FOUND",
    }
}

vocabulary! {
    /// Qualification level of a signature under eIDAS.
    SignatureQualification, "signature qualification" {
        QeSig => "QESIG",
        QeSeal => "QESEAL",
        Qes => "QES",
        AdeSigQc => "ADESIG_QC",
        AdeSealQc => "ADESEAL_QC",
        AdesQc => "ADES_QC",
        AdeSig => "ADESIG",
        AdeSeal => "ADESEAL",
        Ades => "ADES",
        IndeterminateQeSig => "INDETERMINATE_QESIG",
        IndeterminateAdeSig => "INDETERMINATE_ADESIG",
        NotAdesQcQscd => "NOT_ADES_QC_QSCD",
        NotAdes => "NOT_ADES",
        Na => "NA",
    }
}

impl SignatureQualification {
    /// Human readable label, as shown by signature policy engines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::QeSig => "QESig",
            Self::QeSeal => "QESeal",
            Self::Qes => "QES",
            Self::AdeSigQc => "AdESig-QC",
            Self::AdeSealQc => "AdESeal-QC",
            Self::AdesQc => "AdES-QC",
            Self::AdeSig => "AdESig",
            Self::AdeSeal => "AdESeal",
            Self::Ades => "AdES",
            Self::IndeterminateQeSig => "Indeterminate QESig",
            Self::IndeterminateAdeSig => "Indeterminate AdESig",
            Self::NotAdesQcQscd => "Not AdES but QC with QSCD",
            Self::NotAdes => "Not AdES",
            Self::Na => "N/A",
        }
    }
}

impl Default for SignatureQualification {
    fn default() -> Self {
        Self::Na
    }
}

// =============================================================================
// CLUSTER B: SIGNATURE SHAPE
// =============================================================================

vocabulary! {
    /// Signature profile, fixed when the signature is created or parsed.
    SignatureProfile, "signature profile" {
        /// Basic electronic signature, no independent time evidence.
        BBes => "B_BES",
        /// Long-term with a signature timestamp.
        Lt => "LT",
        /// Long-term with an OCSP time-mark.
        LtTm => "LT_TM",
        /// Long-term with an archive timestamp.
        Lta => "LTA",
    }
}
