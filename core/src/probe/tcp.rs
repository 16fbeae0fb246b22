use std::net::SocketAddr;
use std::time::Duration;

use reachr_common::error::ProbeError;
use tokio::net::{self, TcpStream};
use tokio::time::timeout;

use super::{ProbeOutcome, present, timed};

/// Opens and immediately drops a TCP connection to `host:port`.
pub async fn tcp_connect(host: Option<&str>, port: u16, limit: Duration) -> ProbeOutcome {
    let Some(host) = present(host) else {
        return ProbeOutcome::not_discovered("Host IP");
    };
    timed(connect(host, port, limit)).await
}

async fn connect(host: &str, port: u16, limit: Duration) -> Result<String, ProbeError> {
    let target = format!("{host}:{port}");
    match timeout(limit, handshake(host, port, &target)).await {
        Ok(result) => result.map(|_| format!("Connected to {target}")),
        Err(_elapsed) => Err(ProbeError::ConnectTimeout(target)),
    }
}

async fn handshake(host: &str, port: u16, target: &str) -> Result<(), ProbeError> {
    let addr = resolve_socket(host, port).await?;
    match TcpStream::connect(addr).await {
        Ok(_stream) => Ok(()),
        Err(e) => match e.raw_os_error() {
            Some(code) => Err(ProbeError::Refused { target: target.to_string(), code }),
            None => Err(ProbeError::Io(e)),
        },
    }
}

/// Prefers an IPv4 address, like a plain `AF_INET` socket would.
async fn resolve_socket(host: &str, port: u16) -> Result<SocketAddr, ProbeError> {
    let addrs: Vec<SocketAddr> = net::lookup_host((host, port))
        .await
        .map_err(|_| ProbeError::Unresolvable(host.to_string()))?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| ProbeError::Unresolvable(host.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
