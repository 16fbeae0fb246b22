use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PASS_LABEL: &str = "✅ PASS";
pub const FAIL_LABEL: &str = "❌ FAIL";

/// Outcome of one probe, named after the connection it exercised
/// (e.g. `Spark → Neo4j Bolt (7687)`).
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub elapsed: Duration,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, passed: bool, message: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            passed,
            message: message.into(),
            elapsed,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Exported form of a [`CheckResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub name: String,
    pub status: String,
    pub message: String,
    pub duration_ms: f64,
}

impl From<&CheckResult> for CheckRecord {
    fn from(result: &CheckResult) -> Self {
        let status = if result.passed { PASS_LABEL } else { FAIL_LABEL };
        Self {
            name: result.name.clone(),
            status: status.to_string(),
            message: result.message.clone(),
            duration_ms: (result.elapsed_ms() * 100.0).round() / 100.0,
        }
    }
}

/// True when every result passed. An empty suite counts as passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.passed)
}

pub fn passed_count(results: &[CheckResult]) -> usize {
    results.iter().filter(|r| r.passed).count()
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

    #[test]
    fn record_rounds_to_hundredths_of_a_millisecond() {
        let result = CheckResult::new("a", true, "ok", Duration::from_micros(12_345));
        let record = CheckRecord::from(&result);
        assert_eq!(record.status, PASS_LABEL);
        assert_eq!(record.duration_ms, 12.35);

        let failed = CheckResult::new("b", false, "nope", Duration::ZERO);
        let record = CheckRecord::from(&failed);
        assert_eq!(record.status, FAIL_LABEL);
        assert_eq!(record.duration_ms, 0.0);
    }

    #[test]
    fn aggregate_is_logical_and() {
        let ok = CheckResult::new("a", true, "ok", Duration::ZERO);
        let bad = CheckResult::new("b", false, "bad", Duration::ZERO);
        assert!(all_passed(&[]));
        assert!(all_passed(&[ok.clone(), ok.clone()]));
        assert!(!all_passed(&[ok.clone(), bad.clone()]));
        assert_eq!(passed_count(&[ok, bad]), 1);
    }
}
