//! # Self-Identification
//!
//! Figures out which machine the checks run on. The instance metadata
//! service (token first, then values) is authoritative; whatever it cannot
//! provide falls back to the local hostname and its resolved address.

use reachr_common::config::Timeouts;
use reachr_common::models::identity::Identity;
use tracing::debug;

use crate::command::CommandRunner;
use crate::probe;

const METADATA_BASE: &str = "http://169.254.169.254/latest";
const TOKEN_TTL_HEADER: &str = "X-aws-ec2-metadata-token-ttl-seconds: 21600";
const TOKEN_HEADER: &str = "X-aws-ec2-metadata-token";

pub async fn detect(runner: &dyn CommandRunner, timeouts: &Timeouts) -> Identity {
    let metadata = from_metadata(runner, timeouts).await;
    if metadata.is_complete() {
        return metadata;
    }
    debug!(?metadata, "metadata incomplete, falling back to local host");
    metadata.or(from_local_host().await)
}

/// Hostname (`Name` tag) and private address from the metadata service.
pub async fn from_metadata(runner: &dyn CommandRunner, timeouts: &Timeouts) -> Identity {
    let metadata = MetadataClient { runner, timeouts };
    let Some(token) = metadata.token().await else {
        return Identity::default();
    };

    let local_ip = metadata.get("meta-data/local-ipv4", &token).await;
    let hostname = metadata.get("meta-data/tags/instance/Name", &token).await;
    Identity::new(hostname, local_ip)
}

/// Hostname of this machine and the address it resolves to.
pub async fn from_local_host() -> Identity {
    let hostname = match sys_info::hostname() {
        Ok(name) => Some(name),
        Err(e) => {
            debug!("Could not read local hostname: {e}");
            None
        }
    };

    let local_ip = match hostname.as_deref() {
        Some(name) => match probe::lookup_ipv4(name).await {
            Ok(ip) => ip.map(|ip| ip.to_string()),
            Err(e) => {
                debug!("Could not resolve {name}: {e}");
                None
            }
        },
        None => None,
    };

    Identity::new(hostname, local_ip)
}

struct MetadataClient<'a> {
    runner: &'a dyn CommandRunner,
    timeouts: &'a Timeouts,
}

impl MetadataClient<'_> {
    async fn token(&self) -> Option<String> {
        let url = format!("{METADATA_BASE}/api/token");
        self.curl(&["-X", "PUT", url.as_str(), "-H", TOKEN_TTL_HEADER]).await
    }

    async fn get(&self, path: &str, token: &str) -> Option<String> {
        let url = format!("{METADATA_BASE}/{path}");
        let header = format!("{TOKEN_HEADER}: {token}");
        self.curl(&[url.as_str(), "-H", header.as_str()]).await
    }

    /// `--fail` keeps error pages (e.g. a 404 for unset tags) out of stdout.
    async fn curl(&self, request: &[&str]) -> Option<String> {
        let connect_timeout = self.timeouts.metadata_connect.as_secs().to_string();
        let mut args = vec!["-s", "--fail", "--connect-timeout", connect_timeout.as_str()];
        args.extend_from_slice(request);

        match self.runner.run("curl", &args, self.timeouts.metadata_process).await {
            Ok(output) if output.success => {
                Some(output.stdout.trim().to_string()).filter(|v| !v.is_empty())
            }
            Ok(_) => None,
            Err(e) => {
                debug!("Metadata request failed: {e}");
                None
            }
        }
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
