//! Pipeline fetcher
//!
//! Enumerates pipelines and enriches each one with its description and its
//! most recent execution. Calls are issued one after another; the first
//! failure aborts the whole fetch and no partial result is returned.

use sagestat_client::{DirectoryService, Result};
use sagestat_core::domain::pipeline::PipelineRecord;
use sagestat_core::dto::execution::ExecutionQuery;
use tracing::{debug, info};

/// Fetch one record per pipeline, in the order the directory lists them
pub async fn fetch_records(directory: &dyn DirectoryService) -> Result<Vec<PipelineRecord>> {
    let summaries = directory.list_pipelines().await?;
    debug!("Directory returned {} pipeline(s)", summaries.len());

    let mut records = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let description = directory.describe_pipeline(&summary.name).await?;

        let query = ExecutionQuery::latest(description.name.as_str());
        let latest = directory.list_executions(&query).await?.into_iter().next();
        debug!(
            pipeline = %description.name,
            executed = latest.is_some(),
            "Fetched pipeline"
        );

        records.push(PipelineRecord::new(description, latest));
    }

    info!("Fetched {} pipeline record(s)", records.len());
    Ok(records)
}
