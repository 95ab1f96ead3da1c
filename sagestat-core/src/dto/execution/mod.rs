//! Execution DTOs exchanged with the directory service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One execution as returned by an execution listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSummary {
    pub status: String,
    pub start_time: DateTime<Utc>,
}

/// Field executions are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionSortBy {
    CreationTime,
    PipelineExecutionArn,
}

/// Direction of an execution listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Query for the executions of a single pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionQuery {
    pub pipeline_name: String,
    pub sort_by: ExecutionSortBy,
    pub sort_order: SortOrder,
    pub max_results: i32,
}

impl ExecutionQuery {
    /// Query for the single most recently created execution of a pipeline
    pub fn latest(pipeline_name: impl Into<String>) -> Self {
        Self {
            pipeline_name: pipeline_name.into(),
            sort_by: ExecutionSortBy::CreationTime,
            sort_order: SortOrder::Descending,
            max_results: 1,
        }
    }
}
