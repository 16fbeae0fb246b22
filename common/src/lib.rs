//! # reachr common
//!
//! Shared building blocks for the `reachr` workspace.
//!
//! * **[`config`]**: the run configuration and its defaults.
//! * **[`models`]**: discovered infrastructure, identity, roles, check results and reports.
//! * **[`error`]**: typed errors for external commands and probes.

pub mod config;
pub mod error;
pub mod macros;
pub mod models;

#[doc(hidden)]
pub use tracing as __tracing;
