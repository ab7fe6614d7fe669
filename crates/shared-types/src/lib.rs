//! # Shared Types Crate
//!
//! This crate contains the validation vocabulary used by every subsystem of
//! the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every literal that ends up in a rendered
//!   report (`TOTAL_PASSED`, `NO_CERTIFICATE_CHAIN_FOUND`, ...) is defined here.
//! - **Round-trippable**: each vocabulary enum parses back from the literal it
//!   renders to.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
