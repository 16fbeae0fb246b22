//! # Run Configuration
//!
//! Static settings for a single run: service ports, cloud location, the
//! internet probe target and per-probe timeouts.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "eu-central-1";
pub const DEFAULT_PROJECT: &str = "hajar-project";
pub const DEFAULT_INTERNET_HOST: &str = "google.com";
pub const DEFAULT_INTERNET_PORT: u16 = 443;

/// Listening ports of the platform services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePorts {
    pub zeppelin: u16,
    pub spark_master: u16,
    pub spark_webui: u16,
    pub neo4j_bolt: u16,
    pub neo4j_http: u16,
}

impl Default for ServicePorts {
    fn default() -> Self {
        Self {
            zeppelin: 8080,
            spark_master: 7077,
            spark_webui: 8081,
            neo4j_bolt: 7687,
            neo4j_http: 7474,
        }
    }
}

/// Upper bounds for every kind of external call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub tcp: Duration,
    pub dns: Duration,
    /// Passed to curl as `--connect-timeout`.
    pub http_connect: Duration,
    /// Extra time the curl process gets on top of `http_connect`.
    pub http_grace: Duration,
    pub cloud_cli: Duration,
    pub metadata_connect: Duration,
    pub metadata_process: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            tcp: Duration::from_secs(5),
            dns: Duration::from_secs(5),
            http_connect: Duration::from_secs(10),
            http_grace: Duration::from_secs(5),
            cloud_cli: Duration::from_secs(30),
            metadata_connect: Duration::from_secs(2),
            metadata_process: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ports: ServicePorts,
    pub aws_region: String,
    pub project_name: String,
    pub internet_host: String,
    pub internet_port: u16,
    pub timeouts: Timeouts,
    /// Directory the JSON report is written to.
    pub output_dir: PathBuf,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops banner and headers, 2 prints only the verdict.
    pub quiet: u8,
}

impl Config {
    pub fn new(aws_region: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            aws_region: aws_region.into(),
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// `Name` tag of the notebook server.
    pub fn zeppelin_tag(&self) -> String {
        format!("{}-zeppelin", self.project_name)
    }

    /// `Name` tag of the compute worker.
    pub fn spark_tag(&self) -> String {
        format!("{}-spark-worker", self.project_name)
    }

    /// `Name` tag of the graph database node.
    pub fn neo4j_tag(&self) -> String {
        format!("{}-neo4j", self.project_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ports: ServicePorts::default(),
            aws_region: DEFAULT_REGION.to_string(),
            project_name: DEFAULT_PROJECT.to_string(),
            internet_host: DEFAULT_INTERNET_HOST.to_string(),
            internet_port: DEFAULT_INTERNET_PORT,
            timeouts: Timeouts::default(),
            output_dir: PathBuf::from("."),
            no_banner: false,
            quiet: 0,
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
