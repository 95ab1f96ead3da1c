//! Core domain types
//!
//! This module contains the report structures built by the fetcher and
//! consumed by the presenter. Records are assembled once per invocation
//! and are read-only afterwards.

pub mod execution;
pub mod pipeline;
