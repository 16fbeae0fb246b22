//! Typed failures for external commands and reachability probes.
//!
//! The `Display` output of [`ProbeError`] is the message recorded on a failed
//! check, so each variant reads as a complete sentence fragment.

use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{program} is not installed")]
    NotInstalled { program: String },

    #[error("{program} timed out after {}s", .after.as_secs())]
    TimedOut { program: String, after: Duration },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe target was never discovered, so nothing was attempted.
    #[error("{0} not discovered")]
    NotDiscovered(&'static str),

    #[error("Timeout connecting to {0}")]
    ConnectTimeout(String),

    #[error("Cannot resolve hostname: {0}")]
    Unresolvable(String),

    #[error("Cannot connect to {target} (error code: {code})")]
    Refused { target: String, code: i32 },

    #[error("DNS resolution failed: {0}")]
    Resolution(String),

    #[error("Timeout accessing {0}")]
    HttpTimeout(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: String, url: String },

    #[error("S3 access timeout")]
    StorageTimeout,

    #[error("S3 access failed: {0}")]
    StorageDenied(String),

    #[error("AWS CLI not installed")]
    CliMissing,

    #[error("Error: {0}")]
    Io(#[from] io::Error),

    #[error("Error: {0}")]
    Command(#[from] CommandError),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
