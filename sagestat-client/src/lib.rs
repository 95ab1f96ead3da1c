//! sagestat directory client
//!
//! Access to the pipeline directory service: listing pipelines, describing a
//! pipeline and listing its recent executions.
//!
//! The [`DirectoryService`] trait is the seam the report is written against;
//! [`SageMakerDirectory`] implements it on top of the SageMaker API.
//!
//! # Example
//!
//! ```no_run
//! use sagestat_client::{DirectoryService, SageMakerDirectory};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let directory = SageMakerDirectory::from_env(None, None).await;
//!
//!     for summary in directory.list_pipelines().await? {
//!         println!("{}", summary.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod executions;
mod pipelines;

// Re-export commonly used types
pub use error::{ClientError, Operation, Result};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sagemaker::Client;
use chrono::{DateTime, Utc};
use sagestat_core::dto::execution::{ExecutionQuery, ExecutionSummary};
use sagestat_core::dto::pipeline::{PipelineDescription, PipelineSummary};

/// Queries answered by the pipeline directory service
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// List the summaries of all pipelines, in service order
    async fn list_pipelines(&self) -> Result<Vec<PipelineSummary>>;

    /// Describe a single pipeline by name
    async fn describe_pipeline(&self, name: &str) -> Result<PipelineDescription>;

    /// List the executions of one pipeline as constrained by `query`
    async fn list_executions(&self, query: &ExecutionQuery) -> Result<Vec<ExecutionSummary>>;
}

/// Pipeline directory backed by the SageMaker API
#[derive(Debug, Clone)]
pub struct SageMakerDirectory {
    client: Client,
}

impl SageMakerDirectory {
    /// Wrap an already configured SageMaker client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a directory from the ambient AWS configuration
    ///
    /// Credentials and region come from the standard provider chain
    /// (environment, shared config/credentials files, instance metadata).
    /// `profile` and `region` only override what that chain would pick.
    pub async fn from_env(profile: Option<&str>, region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }

        let sdk_config = loader.load().await;
        tracing::debug!(
            region = ?sdk_config.region().map(|r| r.to_string()),
            "Loaded AWS configuration"
        );

        Self::new(Client::new(&sdk_config))
    }

    /// Region the client talks to, if one was resolved
    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}

#[async_trait]
impl DirectoryService for SageMakerDirectory {
    async fn list_pipelines(&self) -> Result<Vec<PipelineSummary>> {
        self.fetch_pipeline_summaries().await
    }

    async fn describe_pipeline(&self, name: &str) -> Result<PipelineDescription> {
        self.fetch_description(name).await
    }

    async fn list_executions(&self, query: &ExecutionQuery) -> Result<Vec<ExecutionSummary>> {
        self.fetch_executions(query).await
    }
}

// =============================================================================
// Response Helpers
// =============================================================================

/// Convert an SDK timestamp to UTC
///
/// Returns `None` if the timestamp cannot be represented by chrono.
fn to_utc(timestamp: &aws_sdk_sagemaker::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

/// Render an SDK error with its whole source chain
fn describe_sdk_error<E: std::error::Error>(err: E) -> String {
    aws_sdk_sagemaker::error::DisplayErrorContext(err).to_string()
}
