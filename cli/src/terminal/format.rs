use colored::*;
use reachr_common::models::check::CheckResult;
use reachr_common::models::identity::Identity;
use reachr_common::models::infrastructure::Infrastructure;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn infrastructure_to_details(infra: &Infrastructure) -> Vec<Detail> {
    vec![
        detail("Zeppelin IP", &infra.zeppelin_ip, colors::IPV4_ADDR),
        detail("Spark IP", &infra.spark_ip, colors::IPV4_ADDR),
        detail("Neo4j IP", &infra.neo4j_ip, colors::IPV4_ADDR),
        detail("ALB DNS", &infra.alb_dns, colors::HOSTNAME),
        detail("S3 Bucket", &infra.s3_bucket, colors::HOSTNAME),
    ]
}

pub fn identity_to_details(identity: &Identity) -> Vec<Detail> {
    vec![
        detail("Hostname", &identity.hostname, colors::HOSTNAME),
        detail("Local IP", &identity.local_ip, colors::IPV4_ADDR),
    ]
}

fn detail(key: &str, value: &Option<String>, color: Color) -> Detail {
    let value: ColoredString = match value {
        Some(v) => v.color(color),
        None => "✗ Not found".color(colors::FAIL),
    };
    (key.to_string(), value)
}

pub fn result_glyph(passed: bool) -> ColoredString {
    if passed { "✅".normal() } else { "❌".normal() }
}

/// `message (12.3ms)` with the timing dimmed.
pub fn result_message(result: &CheckResult) -> String {
    let timing: ColoredString = format!("({:.1}ms)", result.elapsed_ms()).color(colors::SEPARATOR);
    let message: ColoredString = if result.passed {
        result.message.color(colors::TEXT_DEFAULT)
    } else {
        result.message.color(colors::FAIL)
    };
    format!("{} {}", message, timing)
}

pub fn summary(passed: usize, total: usize) -> ColoredString {
    let counts: String = format!("{passed}/{total}");
    let counts: ColoredString = if passed == total {
        counts.color(colors::PASS).bold()
    } else {
        counts.color(colors::FAIL).bold()
    };
    format!("Summary: {counts} tests passed").color(colors::TEXT_DEFAULT)
}

pub fn verdict(all_passed: bool) -> ColoredString {
    if all_passed {
        "🎉 ALL TESTS PASSED!".color(colors::PASS).bold()
    } else {
        "⚠️  SOME TESTS FAILED - Check the results above".color(colors::FAIL).bold()
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
