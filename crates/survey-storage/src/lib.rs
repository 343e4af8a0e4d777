//! survey-storage
//!
//! The survey and response stores, backed by JSON objects in S3. Thin
//! wrapper around the AWS S3 SDK: generic object operations in [`objects`],
//! typed store functions in [`surveys`] and [`responses`].

pub mod client;
pub mod error;
pub mod objects;
pub mod responses;
pub mod surveys;
