//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: the query surface callers use
//! - **Outbound (Driven)**: the normalization interface report backends implement

pub mod inbound;
pub mod outbound;

pub use inbound::ValidationResultApi;
pub use outbound::ReportLayer;
