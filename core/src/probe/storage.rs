use std::time::Duration;

use reachr_common::error::{CommandError, ProbeError};

use super::{ProbeOutcome, present, timed};
use crate::command::CommandRunner;

/// Lists the bucket root once with the `aws` CLI.
pub async fn bucket_listing(
    runner: &dyn CommandRunner,
    bucket: Option<&str>,
    region: &str,
    limit: Duration,
) -> ProbeOutcome {
    let Some(bucket) = present(bucket) else {
        return ProbeOutcome::not_discovered("S3 bucket");
    };
    timed(list(runner, bucket, region, limit)).await
}

async fn list(
    runner: &dyn CommandRunner,
    bucket: &str,
    region: &str,
    limit: Duration,
) -> Result<String, ProbeError> {
    let uri = format!("s3://{bucket}");
    let args = ["s3", "ls", uri.as_str(), "--region", region];

    match runner.run("aws", &args, limit).await {
        Ok(output) if output.success => Ok(format!("S3 bucket {bucket} is accessible")),
        Ok(output) => Err(ProbeError::StorageDenied(output.stderr.trim().to_string())),
        Err(CommandError::TimedOut { .. }) => Err(ProbeError::StorageTimeout),
        Err(CommandError::NotInstalled { .. }) => Err(ProbeError::CliMissing),
        Err(e) => Err(e.into()),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
