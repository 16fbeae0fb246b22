#![cfg(test)]
use std::time::Duration;

use reachr_core::probe;
use tokio::net::TcpListener;

/// A closed loopback port: bound once, then released.
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn tcp_probe_reaches_local_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let outcome = probe::tcp_connect(Some("localhost"), port, Duration::from_secs(2)).await;

    assert!(outcome.passed, "{}", outcome.message);
    assert_eq!(outcome.message, format!("Connected to localhost:{port}"));
}

#[tokio::test]
async fn unreachable_targets_fail_with_a_message() {
    let port = closed_port();
    let targets = [
        ("127.0.0.1", port),
        ("reachr-does-not-exist.invalid", 443),
    ];

    for (host, port) in targets {
        let outcome = probe::tcp_connect(Some(host), port, Duration::from_secs(2)).await;
        assert!(!outcome.passed, "{host}:{port} unexpectedly reachable");
        assert!(!outcome.message.is_empty());
        assert!(outcome.elapsed >= Duration::ZERO);
    }
}

#[tokio::test]
async fn absent_targets_return_immediately() {
    let tcp = probe::tcp_connect(None, 7687, Duration::from_secs(5)).await;
    let dns = probe::resolve(None, Duration::from_secs(5)).await;

    for outcome in [tcp, dns] {
        assert!(!outcome.passed);
        assert_eq!(outcome.elapsed, Duration::ZERO);
        assert!(outcome.message.ends_with("not discovered"));
    }
}

#[tokio::test]
async fn dns_probe_resolves_localhost() {
    let outcome = probe::resolve(Some("localhost"), Duration::from_secs(5)).await;
    assert!(outcome.passed, "{}", outcome.message);
    assert!(outcome.message.starts_with("Resolved localhost to "));
}

#[tokio::test]
#[ignore]
async fn tcp_probe_reaches_the_internet() {
    let outcome = probe::tcp_connect(Some("google.com"), 443, Duration::from_secs(5)).await;
    assert!(outcome.passed, "{}", outcome.message);
}
