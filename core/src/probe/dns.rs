use std::io;
use std::net::IpAddr;
use std::time::Duration;

use reachr_common::error::ProbeError;
use tokio::net;
use tokio::time::timeout;

use super::{ProbeOutcome, present, timed};

/// Resolves `hostname` once through the system resolver.
pub async fn resolve(hostname: Option<&str>, limit: Duration) -> ProbeOutcome {
    let Some(hostname) = present(hostname) else {
        return ProbeOutcome::not_discovered("Hostname");
    };
    timed(resolve_once(hostname, limit)).await
}

async fn resolve_once(hostname: &str, limit: Duration) -> Result<String, ProbeError> {
    match timeout(limit, lookup_ipv4(hostname)).await {
        Ok(Ok(Some(ip))) => Ok(format!("Resolved {hostname} to {ip}")),
        Ok(Ok(None)) => Err(ProbeError::Resolution("no addresses returned".to_string())),
        Ok(Err(e)) => Err(ProbeError::Resolution(e.to_string())),
        Err(_elapsed) => Err(ProbeError::Resolution(format!(
            "timed out after {}s",
            limit.as_secs()
        ))),
    }
}

/// First address of `hostname`, IPv4 preferred.
pub async fn lookup_ipv4(hostname: &str) -> io::Result<Option<IpAddr>> {
    let addrs: Vec<IpAddr> = net::lookup_host((hostname, 0))
        .await?
        .map(|addr| addr.ip())
        .collect();
    Ok(addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
