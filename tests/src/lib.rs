//! # Signature Validation Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for aggregation and rendering
//! └── src/
//!     ├── fixtures.rs   # Engine report shapes shared by scenarios and benches
//!     └── integration/  # Cross-crate scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sv-tests
//! cargo test -p sv-tests integration::trusted_time
//! cargo bench -p sv-tests
//! ```

pub mod fixtures;
pub mod integration;
