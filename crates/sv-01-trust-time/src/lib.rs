//! # Trust-Time Resolver (SV-01)
//!
//! Determines the single trusted signing time of a signature from its
//! profile and the time evidence embedded in it.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure decision table, no I/O, no state
//!
//! ## Decision Table
//!
//! | Profile | Source |
//! |---------|--------|
//! | `B_BES` | none |
//! | `LT_TM` | OCSP response creation time |
//! | `LT`    | timestamp token creation time |
//! | `LTA`   | timestamp token creation time |
//!
//! Missing evidence resolves to `None`, never to an error.

pub mod domain;

pub use domain::evidence::TimeEvidence;
pub use domain::resolver::{resolve_trusted_signing_time, trust_time_source, TrustTimeSource};
