//! Data Transfer Objects for the pipeline directory service
//!
//! These are the shapes the directory service answers with, independent of
//! the SDK that produces them. Timestamps are carried in UTC.

pub mod execution;
pub mod pipeline;
