//! Report command
//!
//! Fetches every record first and only then renders, so a failed service
//! call never leaves a partial table behind.

use anyhow::{Context, Result};
use sagestat_client::DirectoryService;
use std::io::Write;

use crate::fetcher::fetch_records;
use crate::presenter::render;

/// Fetch the pipeline report and write it to `out`
pub async fn run<W: Write>(directory: &dyn DirectoryService, color: bool, out: &mut W) -> Result<()> {
    let records = fetch_records(directory)
        .await
        .context("Failed to fetch pipelines")?;

    render(&records, color, out).context("Failed to write pipeline table")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDirectory, utc};
    use sagestat_client::ClientError;

    #[tokio::test]
    async fn test_report_prints_table() {
        let directory = FakeDirectory::new()
            .with_pipeline("A", "Active", utc(1), Some(("Succeeded", utc(2))))
            .with_pipeline("B", "Active", utc(3), None);

        let mut out = Vec::new();
        run(&directory, false, &mut out).await.unwrap();

        let table = String::from_utf8(out).unwrap();
        // rule, header, rule, two rows, rule
        assert_eq!(table.lines().count(), 6);
        assert!(table.contains("| A "));
        assert!(table.contains("| B "));
    }

    #[tokio::test]
    async fn test_listing_failure_prints_nothing() {
        let directory = FakeDirectory::new()
            .with_pipeline("A", "Active", utc(1), None)
            .failing_listing();

        let mut out = Vec::new();
        let err = run(&directory, false, &mut out).await.unwrap_err();

        assert!(out.is_empty());
        let cause = err.downcast_ref::<ClientError>().unwrap();
        assert!(cause.is_directory_unavailable());
    }

    #[tokio::test]
    async fn test_describe_failure_prints_nothing() {
        let directory = FakeDirectory::new()
            .with_pipeline("A", "Active", utc(1), Some(("Succeeded", utc(2))))
            .with_pipeline("B", "Active", utc(3), None)
            .failing_describe("B");

        let mut out = Vec::new();
        let err = run(&directory, false, &mut out).await.unwrap_err();

        assert!(out.is_empty());
        assert!(format!("{:#}", err).contains("DescribePipeline failed for pipeline `B`"));
    }
}
