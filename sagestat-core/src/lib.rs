//! sagestat Core
//!
//! Core types shared by the sagestat client and CLI.
//!
//! This crate contains:
//! - Domain types: the per-pipeline report record and execution status
//! - DTOs: answers returned by the pipeline directory service

pub mod domain;
pub mod dto;
