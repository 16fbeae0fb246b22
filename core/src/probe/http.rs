use reachr_common::config::Timeouts;
use reachr_common::error::{CommandError, ProbeError};

use super::{ProbeOutcome, present, timed};
use crate::command::CommandRunner;

const CURL: &str = "curl";

/// Fetches `url` once with curl and passes on any 2xx or 3xx status.
pub async fn http_status(
    runner: &dyn CommandRunner,
    url: Option<&str>,
    timeouts: &Timeouts,
) -> ProbeOutcome {
    let Some(url) = present(url) else {
        return ProbeOutcome::not_discovered("URL");
    };
    timed(fetch_status(runner, url, timeouts)).await
}

async fn fetch_status(
    runner: &dyn CommandRunner,
    url: &str,
    timeouts: &Timeouts,
) -> Result<String, ProbeError> {
    let connect_timeout = timeouts.http_connect.as_secs().to_string();
    let args = [
        "-s",
        "-o",
        "/dev/null",
        "-w",
        "%{http_code}",
        "--connect-timeout",
        connect_timeout.as_str(),
        url,
    ];
    let limit = timeouts.http_connect + timeouts.http_grace;

    let output = match runner.run(CURL, &args, limit).await {
        Ok(output) => output,
        Err(CommandError::TimedOut { .. }) => return Err(ProbeError::HttpTimeout(url.to_string())),
        Err(e) => return Err(e.into()),
    };

    let status = output.stdout.trim();
    if is_success_status(status) {
        Ok(format!("HTTP {status} from {url}"))
    } else {
        Err(ProbeError::HttpStatus {
            status: status.to_string(),
            url: url.to_string(),
        })
    }
}

fn is_success_status(status: &str) -> bool {
    status.starts_with('2') || status.starts_with('3')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
