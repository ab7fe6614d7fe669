//! # Report Errors
//!
//! Collaborator-contract violations detected while normalizing or
//! aggregating validation reports. Validation failures of the signatures
//! themselves are never errors here: they are collected as issues.

use thiserror::Error;

/// Errors that abort construction of a `ValidationResult`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A layer listed an empty signature identifier
    #[error("Empty signature identifier")]
    EmptySignatureId,

    /// The same signature identifier appears twice within one layer
    #[error("Duplicate signature identifier within layer: {0}")]
    DuplicateSignatureId(String),

    /// A listed signature has no conclusion in the layer
    #[error("No conclusion for signature: {0}")]
    MissingConclusion(String),

    /// An element or attribute name is not a valid XML name
    #[error("Invalid XML name: {0:?}")]
    InvalidXmlName(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// The audit document could not be serialized
    #[error("Report rendering failed: {0}")]
    Render(String),

    /// A linked report provider did not terminate within the depth limit
    #[error("Report chain exceeds {max} layers")]
    ChainTooLong { max: usize },

    /// An error raised while processing a specific layer
    #[error("Layer {layer}: {source}")]
    Layer {
        layer: usize,
        #[source]
        source: Box<ReportError>,
    },
}

impl ReportError {
    /// Attach the index of the failing layer.
    pub fn in_layer(self, layer: usize) -> Self {
        match self {
            already @ ReportError::Layer { .. } => already,
            other => ReportError::Layer {
                layer,
                source: Box::new(other),
            },
        }
    }
}
