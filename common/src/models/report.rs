use serde::{Deserialize, Serialize};

use super::check::{self, CheckRecord, CheckResult};
use super::identity::Identity;
use super::infrastructure::Infrastructure;
use super::role::Role;

/// Snapshot of a whole run, written to disk as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: String,
    pub hostname: Option<String>,
    pub local_ip: Option<String>,
    pub suite: Role,
    pub infrastructure: Infrastructure,
    pub results: Vec<CheckRecord>,
    pub all_passed: bool,
}

impl Report {
    pub fn new(
        timestamp: impl Into<String>,
        identity: &Identity,
        suite: Role,
        infrastructure: &Infrastructure,
        results: &[CheckResult],
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            hostname: identity.hostname.clone(),
            local_ip: identity.local_ip.clone(),
            suite,
            infrastructure: infrastructure.clone(),
            results: results.iter().map(CheckRecord::from).collect(),
            all_passed: check::all_passed(results),
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
