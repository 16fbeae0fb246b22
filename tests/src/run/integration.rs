#![cfg(test)]
use std::fs;

use reachr_common::config::Config;
use reachr_common::models::check;
use reachr_common::models::identity::Identity;
use reachr_common::models::report::Report;
use reachr_common::models::role::{self, Basis, Role};
use reachr_core::discovery::CloudInventory;
use reachr_core::suite::{self, SuiteRunner};
use reachr_core::{identity, report};
use reachr_integration_tests::FakeCloud;
use tokio::net::TcpListener;

fn platform() -> FakeCloud {
    FakeCloud::default()
        .on("Values=demo-zeppelin", "10.10.1.10\n")
        .on("Values=demo-spark-worker", "10.10.11.20\n")
        .on("Values=demo-neo4j", "10.10.11.30\n")
        .on("elbv2", "None\n")
        .on("s3api", "demo-bucket\n")
        .on("api/token", "token-value")
        .on("local-ipv4", "10.10.11.30")
        .on("tags/instance/Name", "demo-neo4j")
}

/// Discovery, identification and role selection on a database node.
#[tokio::test]
async fn database_node_selects_its_suite() {
    let cloud = platform();
    let cfg = Config::new("eu-central-1", "demo");

    let infra = CloudInventory::new(&cloud, &cfg).discover().await;
    let identity = identity::detect(&cloud, &cfg.timeouts).await;
    let detection = role::detect(&identity, &infra);

    assert_eq!(infra.alb_dns, None);
    assert_eq!(identity.hostname.as_deref(), Some("demo-neo4j"));
    assert_eq!(detection.role, Role::Neo4j);
    assert_eq!(detection.basis, Basis::Hostname);
    assert_eq!(suite::plan(detection.role, &infra, &cfg).len(), 4);
}

/// A suite run against loopback services, with the bucket listing denied,
/// exported to disk.
#[tokio::test]
async fn failing_run_still_produces_matching_report() {
    let zeppelin = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let spark = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let mut cfg = Config::new("eu-central-1", "demo");
    cfg.internet_host = "127.0.0.1".into();
    cfg.internet_port = zeppelin.local_addr().unwrap().port();
    cfg.ports.zeppelin = zeppelin.local_addr().unwrap().port();
    cfg.ports.spark_master = spark.local_addr().unwrap().port();
    let dir = tempfile::tempdir().unwrap();
    cfg.output_dir = dir.path().join("reports");

    let cloud = FakeCloud::default()
        .on("Values=demo-zeppelin", "127.0.0.1")
        .on("Values=demo-spark-worker", "127.0.0.1")
        .on("s3api", "demo-bucket")
        .on_failure("s3 ls", "AccessDenied");
    let infra = CloudInventory::new(&cloud, &cfg).discover().await;
    let identity = Identity::new(Some("demo-neo4j-1".into()), Some("10.10.11.30".into()));
    let detection = role::detect(&identity, &infra);
    assert_eq!(detection.role, Role::Neo4j);

    let checks = suite::plan(detection.role, &infra, &cfg);
    let results = SuiteRunner::new(&cloud, cfg.timeouts).run(&checks, |_| {}).await;

    let outcomes: Vec<bool> = results.iter().map(|r| r.passed).collect();
    assert_eq!(outcomes, [true, true, true, false], "{results:#?}");
    assert_eq!(results[3].message, "S3 access failed: AccessDenied");
    assert!(!check::all_passed(&results));

    let exported = Report::new("20260101_000000", &identity, detection.role, &infra, &results);
    let path = report::write(&exported, &cfg.output_dir).unwrap();
    let written: Report = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(written.all_passed, check::all_passed(&results));
    assert_eq!(written.suite, Role::Neo4j);
    assert_eq!(written.results.len(), 4);
    assert_eq!(written.results[0].status, "✅ PASS");
    assert_eq!(written.infrastructure.neo4j_ip, None);
}

/// Off-platform with nothing discovered: one failing check, report still written.
#[tokio::test]
async fn external_run_without_discovery() {
    let cloud = FakeCloud::default();
    let mut cfg = Config::default();
    let dir = tempfile::tempdir().unwrap();
    cfg.output_dir = dir.path().to_path_buf();

    let infra = CloudInventory::new(&cloud, &cfg).discover().await;
    let identity = Identity::new(Some("laptop".into()), Some("192.168.0.12".into()));
    let detection = role::detect(&identity, &infra);
    let checks = suite::plan(detection.role, &infra, &cfg);
    let results = SuiteRunner::new(&cloud, cfg.timeouts).run(&checks, |_| {}).await;

    assert_eq!(detection.basis, Basis::Fallback);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].message, "Hostname not discovered");

    let exported = Report::new(report::timestamp(), &identity, detection.role, &infra, &results);
    let path = report::write(&exported, &cfg.output_dir).unwrap();
    assert!(path.exists());
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["all_passed"], false);
    assert!(json["infrastructure"]["alb_dns"].is_null());
}
