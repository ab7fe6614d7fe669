//! # Error Types
//!
//! Defines error types shared across subsystems.

use thiserror::Error;

/// A literal did not match any member of a vocabulary enum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} literal: {literal:?}")]
pub struct ParseVocabularyError {
    /// Which vocabulary was being parsed (e.g. "indication").
    pub kind: &'static str,
    /// The rejected input.
    pub literal: String,
}

impl ParseVocabularyError {
    pub(crate) fn new(kind: &'static str, literal: &str) -> Self {
        Self {
            kind,
            literal: literal.to_string(),
        }
    }
}
