//! # Integration Scenarios
//!
//! - `report_aggregation`: report chains and legacy reports into one result
//! - `trusted_time`: trusted signing time per profile through the facade
//! - `container_validation`: multi-signature containers through `SignatureService`

mod container_validation;
mod report_aggregation;
mod trusted_time;
