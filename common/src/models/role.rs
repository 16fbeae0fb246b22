//! # Instance Role Detection
//!
//! Decides which host of the platform the checks run on. Precedence:
//!
//! 1. hostname substring (`zeppelin`, `spark`, `neo4j`, case-insensitive),
//! 2. address in the public subnet,
//! 3. address in the private subnet, matched against the discovered private IPs,
//! 4. anything else is treated as an external machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::infrastructure::Infrastructure;

/// Address prefix of the subnet hosting the notebook server.
pub const PUBLIC_SUBNET_PREFIX: &str = "10.10.1.";
/// Address prefix of the subnet hosting the worker and the database.
pub const PRIVATE_SUBNET_PREFIX: &str = "10.10.11.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Zeppelin,
    Spark,
    Neo4j,
    External,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Zeppelin => "Zeppelin",
            Role::Spark => "Spark",
            Role::Neo4j => "Neo4j",
            Role::External => "External",
        }
    }

    /// Heading printed above the suite results.
    pub fn title(&self) -> String {
        format!("{} Connectivity Tests", self.label())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the role decision was based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Hostname,
    SubnetAddress,
    /// In the private subnet but matching neither discovered private IP.
    UnknownPrivateHost,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub role: Role,
    pub basis: Basis,
}

impl Detection {
    fn new(role: Role, basis: Basis) -> Self {
        Self { role, basis }
    }
}

pub fn detect(identity: &Identity, infra: &Infrastructure) -> Detection {
    if let Some(role) = identity.hostname.as_deref().and_then(role_from_hostname) {
        return Detection::new(role, Basis::Hostname);
    }

    let Some(ip) = identity.local_ip.as_deref() else {
        return Detection::new(Role::External, Basis::Fallback);
    };

    if ip.starts_with(PUBLIC_SUBNET_PREFIX) {
        return Detection::new(Role::Zeppelin, Basis::SubnetAddress);
    }

    if ip.starts_with(PRIVATE_SUBNET_PREFIX) {
        if infra.spark_ip.as_deref() == Some(ip) {
            return Detection::new(Role::Spark, Basis::SubnetAddress);
        }
        if infra.neo4j_ip.as_deref() == Some(ip) {
            return Detection::new(Role::Neo4j, Basis::SubnetAddress);
        }
        return Detection::new(Role::External, Basis::UnknownPrivateHost);
    }

    Detection::new(Role::External, Basis::Fallback)
}

fn role_from_hostname(hostname: &str) -> Option<Role> {
    let lower = hostname.to_lowercase();
    if lower.contains("zeppelin") {
        Some(Role::Zeppelin)
    } else if lower.contains("spark") {
        Some(Role::Spark)
    } else if lower.contains("neo4j") {
        Some(Role::Neo4j)
    } else {
        None
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

#[cfg(test)]
mod tests {
    use super::*;

    fn id(hostname: Option<&str>, ip: Option<&str>) -> Identity {
        Identity::new(hostname.map(String::from), ip.map(String::from))
    }

    fn infra() -> Infrastructure {
        Infrastructure {
            zeppelin_ip: Some("10.10.1.10".into()),
            spark_ip: Some("10.10.11.20".into()),
            neo4j_ip: Some("10.10.11.30".into()),
            ..Default::default()
        }
    }

    #[test]
    fn hostname_wins_over_address() {
        let d = detect(&id(Some("Demo-NEO4J"), Some("10.10.1.10")), &infra());
        assert_eq!(d, Detection::new(Role::Neo4j, Basis::Hostname));
    }

    #[test]
    fn hostname_checks_run_in_order() {
        let d = detect(&id(Some("spark-zeppelin-bridge"), None), &infra());
        assert_eq!(d.role, Role::Zeppelin);
        let d = detect(&id(Some("hajar-project-spark-worker"), None), &infra());
        assert_eq!(d.role, Role::Spark);
    }

    #[test]
    fn public_subnet_means_notebook_server() {
        let d = detect(&id(Some("ip-10-10-1-10"), Some("10.10.1.10")), &infra());
        assert_eq!(d, Detection::new(Role::Zeppelin, Basis::SubnetAddress));
    }

    #[test]
    fn private_subnet_is_not_mistaken_for_public() {
        let d = detect(&id(None, Some("10.10.11.20")), &infra());
        assert_eq!(d, Detection::new(Role::Spark, Basis::SubnetAddress));
        let d = detect(&id(None, Some("10.10.11.30")), &infra());
        assert_eq!(d, Detection::new(Role::Neo4j, Basis::SubnetAddress));
    }

    #[test]
    fn unknown_private_host_falls_back_to_external() {
        let d = detect(&id(None, Some("10.10.11.99")), &infra());
        assert_eq!(d, Detection::new(Role::External, Basis::UnknownPrivateHost));

        let d = detect(&id(None, Some("10.10.11.20")), &Infrastructure::default());
        assert_eq!(d.basis, Basis::UnknownPrivateHost);
    }

    #[test]
    fn anything_else_is_external() {
        assert_eq!(
            detect(&id(Some("laptop"), Some("192.168.1.7")), &infra()),
            Detection::new(Role::External, Basis::Fallback)
        );
        assert_eq!(detect(&Identity::default(), &infra()).role, Role::External);
    }

    #[test]
    fn titles_name_the_suite() {
        assert_eq!(Role::Neo4j.title(), "Neo4j Connectivity Tests");
        assert_eq!(serde_json::to_string(&Role::External).unwrap(), "\"external\"");
    }
}
