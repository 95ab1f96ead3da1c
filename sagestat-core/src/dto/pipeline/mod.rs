//! Pipeline DTOs returned by the directory service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of the pipeline listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub name: String,
}

/// Answer to a describe-pipeline call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDescription {
    pub name: String,
    pub status: String,
    pub last_modified_time: DateTime<Utc>,
}
