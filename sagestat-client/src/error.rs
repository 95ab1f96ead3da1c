//! Error types for the directory client

use std::fmt;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Directory service operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPipelines,
    DescribePipeline,
    ListPipelineExecutions,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListPipelines => "ListPipelines",
            Self::DescribePipeline => "DescribePipeline",
            Self::ListPipelineExecutions => "ListPipelineExecutions",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when querying the pipeline directory
///
/// Every variant is a failed service call from the caller's point of view;
/// none of them is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service call itself failed (network, credentials, throttling, ...)
    #[error("{operation} failed{}: {message}", for_pipeline(.pipeline))]
    ServiceCall {
        operation: Operation,
        pipeline: Option<String>,
        message: String,
    },

    /// The service answered without a field the report needs
    #[error("{operation} response{} is missing `{field}`", for_pipeline(.pipeline))]
    MissingField {
        operation: Operation,
        pipeline: Option<String>,
        field: &'static str,
    },

    /// The service answered with a timestamp outside the representable range
    #[error("{operation} response{} has an invalid `{field}` timestamp", for_pipeline(.pipeline))]
    InvalidTimestamp {
        operation: Operation,
        pipeline: Option<String>,
        field: &'static str,
    },
}

fn for_pipeline(pipeline: &Option<String>) -> String {
    pipeline
        .as_ref()
        .map(|name| format!(" for pipeline `{}`", name))
        .unwrap_or_default()
}

impl ClientError {
    /// Create a service call error
    pub fn service_call(
        operation: Operation,
        pipeline: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self::ServiceCall {
            operation,
            pipeline: pipeline.map(str::to_string),
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(operation: Operation, pipeline: Option<&str>, field: &'static str) -> Self {
        Self::MissingField {
            operation,
            pipeline: pipeline.map(str::to_string),
            field,
        }
    }

    /// Operation that failed
    pub fn operation(&self) -> Operation {
        match self {
            Self::ServiceCall { operation, .. }
            | Self::MissingField { operation, .. }
            | Self::InvalidTimestamp { operation, .. } => *operation,
        }
    }

    /// Check if the pipeline listing itself was unavailable
    pub fn is_directory_unavailable(&self) -> bool {
        self.operation() == Operation::ListPipelines
    }
}
