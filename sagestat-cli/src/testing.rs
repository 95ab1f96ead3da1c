//! In-memory directory used by the unit tests

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sagestat_client::{ClientError, DirectoryService, Operation, Result};
use sagestat_core::dto::execution::{ExecutionQuery, ExecutionSummary};
use sagestat_core::dto::pipeline::{PipelineDescription, PipelineSummary};
use std::collections::HashMap;
use std::sync::Mutex;

/// Fixed UTC timestamp `hours` hours into 2024-05-01
pub fn utc(hours: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + chrono::Duration::hours(hours.into())
}

#[derive(Default)]
pub struct FakeDirectory {
    names: Vec<String>,
    descriptions: HashMap<String, PipelineDescription>,
    executions: HashMap<String, Vec<ExecutionSummary>>,
    fail_listing: bool,
    fail_describe: Option<String>,
    fail_executions: Option<String>,
    queries: Mutex<Vec<ExecutionQuery>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pipeline(
        mut self,
        name: &str,
        status: &str,
        modified: DateTime<Utc>,
        latest: Option<(&str, DateTime<Utc>)>,
    ) -> Self {
        self.names.push(name.to_string());
        self.descriptions.insert(
            name.to_string(),
            PipelineDescription {
                name: name.to_string(),
                status: status.to_string(),
                last_modified_time: modified,
            },
        );
        let executions = latest
            .map(|(status, start_time)| ExecutionSummary {
                status: status.to_string(),
                start_time,
            })
            .into_iter()
            .collect();
        self.executions.insert(name.to_string(), executions);
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn failing_describe(mut self, name: &str) -> Self {
        self.fail_describe = Some(name.to_string());
        self
    }

    pub fn failing_executions(mut self, name: &str) -> Self {
        self.fail_executions = Some(name.to_string());
        self
    }

    /// Execution queries received so far, in call order
    pub fn queries(&self) -> Vec<ExecutionQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn list_pipelines(&self) -> Result<Vec<PipelineSummary>> {
        if self.fail_listing {
            return Err(ClientError::service_call(
                Operation::ListPipelines,
                None,
                "service unavailable",
            ));
        }
        Ok(self
            .names
            .iter()
            .map(|name| PipelineSummary { name: name.clone() })
            .collect())
    }

    async fn describe_pipeline(&self, name: &str) -> Result<PipelineDescription> {
        if self.fail_describe.as_deref() == Some(name) {
            return Err(ClientError::service_call(
                Operation::DescribePipeline,
                Some(name),
                "throttled",
            ));
        }
        self.descriptions.get(name).cloned().ok_or_else(|| {
            ClientError::service_call(Operation::DescribePipeline, Some(name), "not found")
        })
    }

    async fn list_executions(&self, query: &ExecutionQuery) -> Result<Vec<ExecutionSummary>> {
        self.queries.lock().unwrap().push(query.clone());

        let name = query.pipeline_name.as_str();
        if self.fail_executions.as_deref() == Some(name) {
            return Err(ClientError::service_call(
                Operation::ListPipelineExecutions,
                Some(name),
                "access denied",
            ));
        }
        let mut executions = self.executions.get(name).cloned().unwrap_or_default();
        executions.truncate(query.max_results.max(0) as usize);
        Ok(executions)
    }
}
