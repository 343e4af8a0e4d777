//! survey-core
//!
//! Pure domain types, access-control policy, results aggregation, and S3 key
//! conventions. No AWS SDK dependency — this is the shared vocabulary of the
//! survey backend.

pub mod keys;
pub mod models;
pub mod policy;
pub mod results;
