//! survey-auth
//!
//! Cognito JWT claim extraction for the claims-based identity source.

pub mod error;
pub mod jwt;
