//! Pipeline execution listing

use aws_sdk_sagemaker::types::{SortOrder as SdkSortOrder, SortPipelineExecutionsBy};
use sagestat_core::dto::execution::{ExecutionQuery, ExecutionSortBy, ExecutionSummary, SortOrder};
use tracing::debug;

use crate::error::{ClientError, Operation, Result};
use crate::{SageMakerDirectory, describe_sdk_error, to_utc};

impl SageMakerDirectory {
    // =============================================================================
    // Executions
    // =============================================================================

    /// List executions of a single pipeline
    pub(crate) async fn fetch_executions(
        &self,
        query: &ExecutionQuery,
    ) -> Result<Vec<ExecutionSummary>> {
        let operation = Operation::ListPipelineExecutions;
        let pipeline = query.pipeline_name.as_str();

        let output = self
            .client
            .list_pipeline_executions()
            .pipeline_name(pipeline)
            .sort_by(sort_by(query.sort_by))
            .sort_order(sort_order(query.sort_order))
            .max_results(query.max_results)
            .send()
            .await
            .map_err(|e| {
                ClientError::service_call(operation, Some(pipeline), describe_sdk_error(e))
            })?;

        let executions = output
            .pipeline_execution_summaries()
            .iter()
            .map(|summary| {
                let status = summary.pipeline_execution_status().ok_or_else(|| {
                    ClientError::missing_field(operation, Some(pipeline), "PipelineExecutionStatus")
                })?;
                let start = summary.start_time().ok_or_else(|| {
                    ClientError::missing_field(operation, Some(pipeline), "StartTime")
                })?;
                let start_time = to_utc(start).ok_or_else(|| ClientError::InvalidTimestamp {
                    operation,
                    pipeline: Some(pipeline.to_string()),
                    field: "StartTime",
                })?;

                Ok(ExecutionSummary {
                    status: status.as_str().to_string(),
                    start_time,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(pipeline, "Listed {} execution(s)", executions.len());
        Ok(executions)
    }
}

fn sort_by(sort_by: ExecutionSortBy) -> SortPipelineExecutionsBy {
    match sort_by {
        ExecutionSortBy::CreationTime => SortPipelineExecutionsBy::CreationTime,
        ExecutionSortBy::PipelineExecutionArn => SortPipelineExecutionsBy::PipelineExecutionArn,
    }
}

fn sort_order(sort_order: SortOrder) -> SdkSortOrder {
    match sort_order {
        SortOrder::Ascending => SdkSortOrder::Ascending,
        SortOrder::Descending => SdkSortOrder::Descending,
    }
}
