use serde::{Deserialize, Serialize};

/// Best-effort hostname and address of the machine running the checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub hostname: Option<String>,
    pub local_ip: Option<String>,
}

impl Identity {
    /// Builds an identity, treating blank values as absent.
    pub fn new(hostname: Option<String>, local_ip: Option<String>) -> Self {
        Self {
            hostname: non_blank(hostname),
            local_ip: non_blank(local_ip),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.hostname.is_some() && self.local_ip.is_some()
    }

    /// Fills missing fields from `other`, keeping what is already known.
    pub fn or(self, other: Identity) -> Identity {
        Identity {
            hostname: self.hostname.or(other.hostname),
            local_ip: self.local_ip.or(other.local_ip),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
