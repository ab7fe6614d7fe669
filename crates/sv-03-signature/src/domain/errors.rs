//! # Signature Errors

use sv_02_validation_report::ReportError;
use thiserror::Error;

/// Errors raised by the signature facade.
///
/// A signature that fails validation is not an error: its failures are
/// reported through the `ValidationResult`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The validation report behind a signature is malformed
    #[error("Malformed validation report: {0}")]
    Report(#[from] ReportError),

    /// No signature with this identifier in the container
    #[error("Unknown signature: {0}")]
    UnknownSignature(String),

    /// A container already holds a signature with this identifier
    #[error("Duplicate signature: {0}")]
    DuplicateSignature(String),

    /// Certificate bytes could not be decoded
    #[error("Invalid certificate encoding: {0}")]
    InvalidCertificate(String),
}
