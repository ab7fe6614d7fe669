//! # Validation Report Subsystem (SV-02)
//!
//! Turns the native reports of two unrelated validation engines into one
//! queryable `ValidationResult`.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): issues, indication records, audit tree, result
//! - **Ports Layer** (`ports/`): `ReportLayer` (normalization) and
//!   `ValidationResultApi` (query surface)
//! - **Adapters Layer** (`adapters/`): XAdES simple reports, legacy DigiDoc reports
//! - **Service Layer** (`service.rs`): the `Aggregator`
//!
//! ## Data Flow
//!
//! ```text
//! engine reports ──► ReportLayer ──► Aggregator ──► ValidationResult
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use sv_02_validation_report::{ReportChain, ValidationResult, ValidationResultApi};
//!
//! let result = ValidationResult::from_layers(chain.layers())?;
//! if !result.is_valid() {
//!     for error in result.errors() {
//!         eprintln!("{error}");
//!     }
//! }
//! println!("{:?}", result.indication(None));
//! ```

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{
    BasicInfo, LegacyIssue, LegacyReport, LinkedReports, ReportChain, ScopedLayer,
    SignatureConclusion, SimpleReport,
};
pub use domain::{
    AuditDocument, AuditElement, AuditNode, IndicationRecord, ReportConfig, ReportError,
    ValidationIssue, ValidationResult, ValidationSummary,
};
pub use metrics::{AggregationMetrics, MetricsSnapshot};
pub use ports::{ReportLayer, ValidationResultApi};
pub use service::Aggregator;
