//! # Adapters Layer
//!
//! One `ReportLayer` implementation per validation backend.
//!
//! - `xades`: multi-layer simple reports of the signature policy engine
//! - `legacy`: flat per-signature reports of the DigiDoc engine
//! - `scoped`: any layer narrowed to a single signature

pub mod legacy;
pub mod scoped;
pub mod xades;

pub use legacy::{LegacyIssue, LegacyReport};
pub use scoped::ScopedLayer;
pub use xades::{BasicInfo, LinkedReports, ReportChain, SignatureConclusion, SimpleReport};
