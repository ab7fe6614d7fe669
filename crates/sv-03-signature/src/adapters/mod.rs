//! # Adapters Layer
//!
//! One `Signature` implementation per container backend.

pub mod legacy;
pub mod xades;

pub use legacy::LegacySignature;
pub use xades::XadesSignature;
