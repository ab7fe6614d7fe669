//! # Domain Layer
//!
//! Pure report logic with no I/O dependencies.
//!
//! This layer contains:
//! - Neutral issue and indication entities
//! - The append-only audit tree and its renderer
//! - Report configuration
//! - The immutable `ValidationResult`
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Nothing here knows about a specific report backend

pub mod audit;
pub mod config;
pub mod entities;
pub mod errors;
pub mod render;
pub mod result;

pub use audit::{AuditDocument, AuditElement, AuditNode};
pub use config::ReportConfig;
pub use entities::{IndicationRecord, ValidationIssue};
pub use errors::ReportError;
pub use result::{ValidationResult, ValidationSummary};
