//! Pipeline report types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::dto::execution::ExecutionSummary;
use crate::dto::pipeline::PipelineDescription;

/// One row of the pipeline report
///
/// Built by the fetcher from a describe-pipeline answer and the newest
/// execution, if any. Timestamps are in the local time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRecord {
    pub name: String,
    pub status: String,
    pub last_modified_time: DateTime<Local>,
    pub last_execution: Option<LastExecution>,
}

/// Most recent execution of a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastExecution {
    pub status: String,
    pub start_time: DateTime<Local>,
}

impl PipelineRecord {
    /// Assembles a record, converting service timestamps to local time
    pub fn new(description: PipelineDescription, latest: Option<ExecutionSummary>) -> Self {
        Self {
            name: description.name,
            status: description.status,
            last_modified_time: description.last_modified_time.with_timezone(&Local),
            last_execution: latest.map(LastExecution::from),
        }
    }

    /// Status of the most recent execution, empty if the pipeline never ran
    pub fn last_execution_status(&self) -> &str {
        self.last_execution
            .as_ref()
            .map(|e| e.status.as_str())
            .unwrap_or_default()
    }

    /// Start time of the most recent execution
    pub fn last_execution_time(&self) -> Option<DateTime<Local>> {
        self.last_execution.as_ref().map(|e| e.start_time)
    }
}

impl From<ExecutionSummary> for LastExecution {
    fn from(summary: ExecutionSummary) -> Self {
        Self {
            status: summary.status,
            start_time: summary.start_time.with_timezone(&Local),
        }
    }
}
