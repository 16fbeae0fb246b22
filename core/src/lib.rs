//! # reachr core
//!
//! Everything that touches the outside world during a run:
//!
//! * **[`command`]**: the [`command::CommandRunner`] seam used for every external CLI call.
//! * **[`discovery`]**: cloud inventory lookups producing an [`Infrastructure`](reachr_common::models::infrastructure::Infrastructure).
//! * **[`identity`]**: instance metadata with a local hostname fallback.
//! * **[`probe`]**: single-attempt TCP, DNS, HTTP and bucket checks.
//! * **[`suite`]**: the fixed, ordered checks for each role and their sequential execution.
//! * **[`report`]**: JSON export of the run.

pub mod command;
pub mod discovery;
pub mod identity;
pub mod probe;
pub mod report;
pub mod suite;
