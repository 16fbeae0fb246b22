//! Console macros shared by every crate in the workspace.
//!
//! Events emitted here carry dedicated targets so the terminal formatter
//! can render them differently from ordinary log lines.

/// Target used for lines that are printed verbatim.
pub const PRINT_TARGET: &str = "reachr::print";

/// Target used for positive outcomes.
pub const SUCCESS_TARGET: &str = "reachr::success";

/// Logs a positive outcome.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "reachr::success", $($arg)*)
    };
}
