//! # Signature Facade Subsystem (SV-03)
//!
//! Per-signature view of a signed container: parsed metadata, certificates,
//! the trusted signing time and validation through the report aggregator.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): metadata, certificates, errors
//! - **Ports Layer** (`ports/`): the `Signature` trait
//! - **Adapters Layer** (`adapters/`): XAdES and legacy DigiDoc signatures
//! - **Service Layer** (`service.rs`): container-level `SignatureService`
//!
//! ## Usage
//!
//! ```ignore
//! use sv_03_signature::{Signature, SignatureService};
//!
//! let signature = service.find("S0")?;
//! println!("trusted time: {:?}", signature.trusted_signing_time());
//! let result = service.validate_all()?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{LegacySignature, XadesSignature};
pub use domain::{ProductionPlace, SignatureError, SignatureMetadata, SubjectName, X509Cert};
pub use ports::Signature;
pub use service::SignatureService;
