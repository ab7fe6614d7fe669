//! # Signature Service
//!
//! Holds the signatures of one container and validates them individually
//! or together. Container-level validation concatenates every signature's
//! scoped layers in signature order and aggregates them once, so a report
//! shared by several signatures contributes each signature exactly once.

use crate::domain::SignatureError;
use crate::ports::Signature;
use sv_02_validation_report::{Aggregator, ValidationResult};
use tracing::debug;

/// The signatures of one container, in container order.
#[derive(Default)]
pub struct SignatureService {
    signatures: Vec<Box<dyn Signature>>,
    aggregator: Aggregator,
}

impl SignatureService {
    /// Create an empty service validating through `aggregator`.
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            signatures: Vec::new(),
            aggregator,
        }
    }

    /// Add a signature.
    ///
    /// # Errors
    /// * `SignatureError::DuplicateSignature` - the id is already present
    pub fn add(&mut self, signature: Box<dyn Signature>) -> Result<(), SignatureError> {
        if self.signatures.iter().any(|s| s.id() == signature.id()) {
            return Err(SignatureError::DuplicateSignature(signature.id().to_string()));
        }
        debug!(signature_id = %signature.id(), profile = %signature.profile(), "Signature added");
        self.signatures.push(signature);
        Ok(())
    }

    pub fn signatures(&self) -> &[Box<dyn Signature>] {
        &self.signatures
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Look up a signature by id.
    pub fn find(&self, signature_id: &str) -> Result<&dyn Signature, SignatureError> {
        self.signatures
            .iter()
            .find(|s| s.id() == signature_id)
            .map(|s| &**s)
            .ok_or_else(|| SignatureError::UnknownSignature(signature_id.to_string()))
    }

    /// Validate one signature.
    pub fn validate(&self, signature_id: &str) -> Result<ValidationResult, SignatureError> {
        self.find(signature_id)?.validate_with(&self.aggregator)
    }

    /// Validate the whole container.
    ///
    /// An empty container yields an empty, valid result.
    pub fn validate_all(&self) -> Result<ValidationResult, SignatureError> {
        let layers: Vec<_> = self
            .signatures
            .iter()
            .flat_map(|signature| signature.scoped_layers())
            .collect();
        debug!(
            signatures = self.signatures.len(),
            layers = layers.len(),
            "Validating container"
        );
        Ok(self.aggregator.aggregate(&layers)?)
    }
}
