use serde::{Deserialize, Serialize};

/// Addresses discovered at runtime. Every field is independent and absent
/// when its lookup failed; checks depending on an absent field fail without I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub zeppelin_ip: Option<String>,
    pub spark_ip: Option<String>,
    pub neo4j_ip: Option<String>,
    pub alb_dns: Option<String>,
    pub s3_bucket: Option<String>,
}

impl Infrastructure {
    /// `http://` URL of the load balancer, if it was discovered.
    pub fn alb_url(&self) -> Option<String> {
        self.alb_dns.as_ref().map(|dns| format!("http://{dns}"))
    }

    /// Number of fields that were discovered.
    pub fn discovered_count(&self) -> usize {
        [
            &self.zeppelin_ip,
            &self.spark_ip,
            &self.neo4j_ip,
            &self.alb_dns,
            &self.s3_bucket,
        ]
        .iter()
        .filter(|field| field.is_some())
        .count()
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
