//! # Domain Models
//!
//! * [`infrastructure::Infrastructure`]: addresses discovered through the cloud provider.
//! * [`identity::Identity`]: who the local machine claims to be.
//! * [`role::Role`]: which platform host we are running on, and therefore which suite runs.
//! * [`check::CheckResult`]: the outcome of a single probe.
//! * [`report::Report`]: the snapshot exported at the end of a run.

pub mod check;
pub mod identity;
pub mod infrastructure;
pub mod report;
pub mod role;
