//! Pipeline listing and description

use sagestat_core::dto::pipeline::{PipelineDescription, PipelineSummary};
use tracing::debug;

use crate::error::{ClientError, Operation, Result};
use crate::{SageMakerDirectory, describe_sdk_error, to_utc};

impl SageMakerDirectory {
    // =============================================================================
    // Pipeline Directory
    // =============================================================================

    /// List pipeline summaries
    ///
    /// Only the first page the service returns is read.
    pub(crate) async fn fetch_pipeline_summaries(&self) -> Result<Vec<PipelineSummary>> {
        let operation = Operation::ListPipelines;
        let output = self
            .client
            .list_pipelines()
            .send()
            .await
            .map_err(|e| ClientError::service_call(operation, None, describe_sdk_error(e)))?;

        let summaries = output
            .pipeline_summaries()
            .iter()
            .map(|summary| {
                summary
                    .pipeline_name()
                    .map(|name| PipelineSummary {
                        name: name.to_string(),
                    })
                    .ok_or_else(|| ClientError::missing_field(operation, None, "PipelineName"))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Listed {} pipeline(s)", summaries.len());
        Ok(summaries)
    }

    /// Describe a pipeline by name
    pub(crate) async fn fetch_description(&self, name: &str) -> Result<PipelineDescription> {
        let operation = Operation::DescribePipeline;
        let output = self
            .client
            .describe_pipeline()
            .pipeline_name(name)
            .send()
            .await
            .map_err(|e| ClientError::service_call(operation, Some(name), describe_sdk_error(e)))?;

        let status = output
            .pipeline_status()
            .ok_or_else(|| ClientError::missing_field(operation, Some(name), "PipelineStatus"))?;
        let last_modified = output
            .last_modified_time()
            .ok_or_else(|| ClientError::missing_field(operation, Some(name), "LastModifiedTime"))?;
        let last_modified_time = to_utc(last_modified).ok_or_else(|| ClientError::InvalidTimestamp {
            operation,
            pipeline: Some(name.to_string()),
            field: "LastModifiedTime",
        })?;

        Ok(PipelineDescription {
            name: output.pipeline_name().unwrap_or(name).to_string(),
            status: status.as_str().to_string(),
            last_modified_time,
        })
    }
}
