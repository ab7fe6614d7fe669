//! # Domain Layer
//!
//! Signature metadata, certificates and facade errors.

pub mod certificate;
pub mod errors;
pub mod metadata;

pub use certificate::{SubjectName, X509Cert};
pub use errors::SignatureError;
pub use metadata::{ProductionPlace, SignatureMetadata};
