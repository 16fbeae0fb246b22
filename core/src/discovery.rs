//! # Cloud Inventory Discovery
//!
//! Looks up the platform's addresses through the `aws` CLI instead of static
//! configuration. Each lookup is a single call: no pagination, no retries.
//! A failed lookup is logged and yields `None`.

use reachr_common::config::Config;
use reachr_common::models::infrastructure::Infrastructure;
use tracing::{debug, info, warn};

use crate::command::CommandRunner;

const AWS: &str = "aws";

pub struct CloudInventory<'a> {
    runner: &'a dyn CommandRunner,
    cfg: &'a Config,
}

impl<'a> CloudInventory<'a> {
    pub fn new(runner: &'a dyn CommandRunner, cfg: &'a Config) -> Self {
        Self { runner, cfg }
    }

    /// Resolves every address of the platform, in a fixed order.
    pub async fn discover(&self) -> Infrastructure {
        info!("Looking for instances with project: {}", self.cfg.project_name);

        let infra = Infrastructure {
            zeppelin_ip: self.instance_ip_by_tag(&self.cfg.zeppelin_tag()).await,
            spark_ip: self.instance_ip_by_tag(&self.cfg.spark_tag()).await,
            neo4j_ip: self.instance_ip_by_tag(&self.cfg.neo4j_tag()).await,
            alb_dns: self.load_balancer_dns().await,
            s3_bucket: self.bucket_name().await,
        };

        debug!(?infra, "discovery finished");
        infra
    }

    /// Private IP of the running instance carrying the `Name` tag `tag`.
    pub async fn instance_ip_by_tag(&self, tag: &str) -> Option<String> {
        let tag_filter = format!("Name=tag:Name,Values={tag}");
        let args = [
            "ec2",
            "describe-instances",
            "--region",
            self.cfg.aws_region.as_str(),
            "--filters",
            tag_filter.as_str(),
            "Name=instance-state-name,Values=running",
            "--query",
            "Reservations[0].Instances[0].PrivateIpAddress",
            "--output",
            "text",
        ];
        self.lookup(&format!("IP for {tag}"), &args).await
    }

    /// DNS name of the first load balancer whose name contains the project name.
    pub async fn load_balancer_dns(&self) -> Option<String> {
        let query = format!(
            "LoadBalancers[?contains(LoadBalancerName, '{}')].DNSName",
            self.cfg.project_name
        );
        let args = [
            "elbv2",
            "describe-load-balancers",
            "--region",
            self.cfg.aws_region.as_str(),
            "--query",
            query.as_str(),
            "--output",
            "text",
        ];
        self.lookup("ALB DNS", &args).await
    }

    /// First bucket whose name contains the project name.
    pub async fn bucket_name(&self) -> Option<String> {
        let query = format!("Buckets[?contains(Name, '{}')].Name", self.cfg.project_name);
        let args = ["s3api", "list-buckets", "--query", query.as_str(), "--output", "text"];
        self.lookup("S3 bucket", &args).await
    }

    async fn lookup(&self, what: &str, args: &[&str]) -> Option<String> {
        match self.runner.run(AWS, args, self.cfg.timeouts.cloud_cli).await {
            Ok(output) => first_value(&output.stdout),
            Err(e) => {
                warn!("Could not get {what}: {e}");
                None
            }
        }
    }
}

/// First whitespace-separated token of `--output text` output, unless the
/// CLI printed its placeholder for "nothing matched".
pub fn first_value(stdout: &str) -> Option<String> {
    stdout
        .split_whitespace()
        .next()
        .filter(|token| !matches!(*token, "None" | "null"))
        .map(str::to_string)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::ScriptedRunner;
    use reachr_common::error::CommandError;
    use std::time::Duration;

    #[test]
    fn first_value_handles_cli_placeholders() {
        assert_eq!(first_value("10.10.1.5\n").as_deref(), Some("10.10.1.5"));
        assert_eq!(first_value("None\n"), None);
        assert_eq!(first_value("null"), None);
        assert_eq!(first_value("   \n"), None);
        assert_eq!(
            first_value("demo-data\tdemo-logs\n").as_deref(),
            Some("demo-data")
        );
    }

    #[tokio::test]
    async fn discovers_every_field() {
        let runner = ScriptedRunner::default()
            .reply("Values=demo-zeppelin", "10.10.1.10\n")
            .reply("Values=demo-spark-worker", "10.10.11.20\n")
            .reply("Values=demo-neo4j", "None\n")
            .reply("elbv2", "demo-alb-123.eu-central-1.elb.amazonaws.com\n")
            .reply("s3api", "demo-bucket\tdemo-bucket-logs\n");
        let cfg = Config::new("eu-central-1", "demo");

        let infra = CloudInventory::new(&runner, &cfg).discover().await;

        assert_eq!(infra.zeppelin_ip.as_deref(), Some("10.10.1.10"));
        assert_eq!(infra.spark_ip.as_deref(), Some("10.10.11.20"));
        assert_eq!(infra.neo4j_ip, None);
        assert_eq!(
            infra.alb_dns.as_deref(),
            Some("demo-alb-123.eu-central-1.elb.amazonaws.com")
        );
        assert_eq!(infra.s3_bucket.as_deref(), Some("demo-bucket"));
        assert_eq!(runner.call_count(), 5);
        assert!(runner.called_with("--region eu-central-1"));
        assert!(runner.called_with("contains(LoadBalancerName, 'demo')"));
    }

    #[tokio::test]
    async fn failed_lookups_are_absent() {
        let runner = ScriptedRunner::default().fail("aws", || CommandError::TimedOut {
            program: "aws".into(),
            after: Duration::from_secs(30),
        });
        let cfg = Config::default();

        let infra = CloudInventory::new(&runner, &cfg).discover().await;

        assert_eq!(infra, Infrastructure::default());
        assert_eq!(runner.call_count(), 5);
    }
}
