//! # Test Suites
//!
//! One fixed, ordered list of checks per [`Role`]. Planning is pure; running
//! awaits each probe to completion before starting the next.

use reachr_common::config::{Config, Timeouts};
use reachr_common::models::check::CheckResult;
use reachr_common::models::infrastructure::Infrastructure;
use reachr_common::models::role::Role;
use tracing::debug;

use crate::command::CommandRunner;
use crate::probe::{self, ProbeOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Tcp { host: Option<String>, port: u16 },
    Dns { hostname: Option<String> },
    Http { url: Option<String> },
    Bucket { bucket: Option<String>, region: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: String,
    pub probe: Probe,
}

impl Check {
    fn tcp(name: String, host: &Option<String>, port: u16) -> Self {
        Self {
            name,
            probe: Probe::Tcp { host: host.clone(), port },
        }
    }

    fn bucket(source: Role, infra: &Infrastructure, cfg: &Config) -> Self {
        Self {
            name: format!("{source} → S3 Bucket"),
            probe: Probe::Bucket {
                bucket: infra.s3_bucket.clone(),
                region: cfg.aws_region.clone(),
            },
        }
    }
}

/// The checks to run from a host playing `role`, in execution order.
pub fn plan(role: Role, infra: &Infrastructure, cfg: &Config) -> Vec<Check> {
    let ports = &cfg.ports;
    let internet = Some(cfg.internet_host.clone());

    match role {
        Role::Zeppelin => vec![
            Check::tcp("Zeppelin → Internet".into(), &internet, cfg.internet_port),
            Check::tcp(format!("Zeppelin → Spark Master ({})", ports.spark_master), &infra.spark_ip, ports.spark_master),
            Check::tcp(format!("Zeppelin → Spark WebUI ({})", ports.spark_webui), &infra.spark_ip, ports.spark_webui),
            Check::tcp(format!("Zeppelin → Neo4j Bolt ({})", ports.neo4j_bolt), &infra.neo4j_ip, ports.neo4j_bolt),
            Check::tcp(format!("Zeppelin → Neo4j HTTP ({})", ports.neo4j_http), &infra.neo4j_ip, ports.neo4j_http),
            Check::bucket(role, infra, cfg),
        ],
        Role::Spark => vec![
            Check::tcp("Spark → Internet (NAT)".into(), &internet, cfg.internet_port),
            Check::tcp(format!("Spark → Neo4j Bolt ({})", ports.neo4j_bolt), &infra.neo4j_ip, ports.neo4j_bolt),
            Check::tcp(format!("Spark → Neo4j HTTP ({})", ports.neo4j_http), &infra.neo4j_ip, ports.neo4j_http),
            Check::tcp(format!("Spark → Zeppelin ({})", ports.zeppelin), &infra.zeppelin_ip, ports.zeppelin),
            Check::bucket(role, infra, cfg),
        ],
        Role::Neo4j => vec![
            Check::tcp("Neo4j → Internet (NAT)".into(), &internet, cfg.internet_port),
            Check::tcp(format!("Neo4j → Spark Master ({})", ports.spark_master), &infra.spark_ip, ports.spark_master),
            Check::tcp(format!("Neo4j → Zeppelin ({})", ports.zeppelin), &infra.zeppelin_ip, ports.zeppelin),
            Check::bucket(role, infra, cfg),
        ],
        Role::External => {
            let mut checks = vec![Check {
                name: "ALB DNS Resolution".into(),
                probe: Probe::Dns { hostname: infra.alb_dns.clone() },
            }];
            if let Some(url) = infra.alb_url() {
                checks.push(Check {
                    name: "ALB → Zeppelin (HTTP)".into(),
                    probe: Probe::Http { url: Some(url) },
                });
            }
            checks
        }
    }
}

pub struct SuiteRunner<'a> {
    runner: &'a dyn CommandRunner,
    timeouts: Timeouts,
}

impl<'a> SuiteRunner<'a> {
    pub fn new(runner: &'a dyn CommandRunner, timeouts: Timeouts) -> Self {
        Self { runner, timeouts }
    }

    /// Runs `checks` one after another. `on_start` fires before each check.
    pub async fn run<F>(&self, checks: &[Check], mut on_start: F) -> Vec<CheckResult>
    where
        F: FnMut(&Check),
    {
        let mut results = Vec::with_capacity(checks.len());
        for check in checks {
            on_start(check);
            let result = self.run_check(check).await;
            debug!(name = %result.name, passed = result.passed, "check finished");
            results.push(result);
        }
        results
    }

    pub async fn run_check(&self, check: &Check) -> CheckResult {
        let outcome: ProbeOutcome = match &check.probe {
            Probe::Tcp { host, port } => {
                probe::tcp_connect(host.as_deref(), *port, self.timeouts.tcp).await
            }
            Probe::Dns { hostname } => probe::resolve(hostname.as_deref(), self.timeouts.dns).await,
            Probe::Http { url } => {
                probe::http_status(self.runner, url.as_deref(), &self.timeouts).await
            }
            Probe::Bucket { bucket, region } => {
                probe::bucket_listing(self.runner, bucket.as_deref(), region, self.timeouts.cloud_cli)
                    .await
            }
        };
        outcome.into_result(check.name.clone())
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
