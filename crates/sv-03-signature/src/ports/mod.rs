//! # Ports Layer
//!
//! - **Inbound** (`inbound.rs`): the `Signature` facade
//!
//! The driven side is `sv_02_validation_report::ReportLayer`.

pub mod inbound;

pub use inbound::Signature;
