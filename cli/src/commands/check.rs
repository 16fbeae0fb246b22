use std::path::PathBuf;
use std::time::Instant;

use colored::*;
use reachr_common::config::Config;
use reachr_common::models::check::{self, CheckResult};
use reachr_common::models::identity::Identity;
use reachr_common::models::infrastructure::Infrastructure;
use reachr_common::models::report::Report;
use reachr_common::models::role::{self, Basis, Detection, Role};
use reachr_common::success;
use reachr_core::command::SystemRunner;
use reachr_core::discovery::CloudInventory;
use reachr_core::suite::{self, SuiteRunner};
use reachr_core::{identity, report};
use tracing::{info, warn};

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

/// Discovers the platform, runs the suite for this host and exports the report.
///
/// Returns whether every executed check passed. Only a failed report write is an error.
pub async fn check(cfg: &Config) -> anyhow::Result<bool> {
    let runner = SystemRunner;
    let start_time: Instant = Instant::now();

    print::header("discovering infrastructure", cfg.quiet);
    spinner::start("Querying the cloud inventory...");
    let infra: Infrastructure = CloudInventory::new(&runner, cfg).discover().await;
    print_infrastructure(&infra, cfg);

    spinner::report_stage("Asking the instance metadata service...");
    let identity: Identity = identity::detect(&runner, &cfg.timeouts).await;
    print_identity(&identity, cfg);

    let detection: Detection = role::detect(&identity, &infra);
    announce(&detection, cfg);

    let checks = suite::plan(detection.role, &infra, cfg);
    let total: usize = checks.len();
    let mut idx: usize = 0;
    let results: Vec<CheckResult> = SuiteRunner::new(&runner, cfg.timeouts)
        .run(&checks, |check| {
            spinner::report_check_progress(&check.name, idx, total);
            idx += 1;
        })
        .await;
    spinner::finish();

    let all_passed: bool = print_results(&detection.role.title(), &results, cfg);
    if detection.basis == Basis::Fallback && cfg.quiet == 0 {
        mprint!();
        info!("To run full tests, copy this tool to each instance and run it there.");
    }
    print_verdict(all_passed, cfg);

    let report = Report::new(report::timestamp(), &identity, detection.role, &infra, &results);
    let path: PathBuf = report::write(&report, &cfg.output_dir)?;
    success!(
        "Results saved to {} in {:.2}s",
        path.display().to_string().color(colors::PRIMARY),
        start_time.elapsed().as_secs_f64()
    );

    Ok(all_passed)
}

fn print_infrastructure(infra: &Infrastructure, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    let found: String = format!("{}/5 found", infra.discovered_count());
    print::tree_head("◆", &format!("Project {} ({found})", cfg.project_name));
    print::as_tree_one_level(format::infrastructure_to_details(infra));
}

fn print_identity(identity: &Identity, cfg: &Config) {
    print::header("detecting current instance", cfg.quiet);
    if cfg.quiet > 1 {
        return;
    }
    print::tree_head("◆", "This machine");
    print::as_tree_one_level(format::identity_to_details(identity));
}

fn announce(detection: &Detection, cfg: &Config) {
    let role: ColoredString = detection.role.label().to_uppercase().color(colors::ACCENT).bold();
    match (detection.basis, detection.role) {
        (Basis::Hostname, _) => info!("Running on {role} instance"),
        (Basis::SubnetAddress, Role::Zeppelin) => info!("Running on {role} instance (detected by IP)"),
        (Basis::SubnetAddress, _) => info!("Running on PRIVATE subnet instance ({role})"),
        (Basis::UnknownPrivateHost, _) => {
            info!("Running on PRIVATE subnet instance");
            warn!("Could not determine instance type, running external tests");
        }
        (Basis::Fallback, _) => info!("Running from LOCAL machine (external tests)"),
    }
    if cfg.quiet == 0 {
        mprint!();
    }
}

/// Prints one suite and returns whether all of its checks passed.
fn print_results(title: &str, results: &[CheckResult], cfg: &Config) -> bool {
    let passed: usize = check::passed_count(results);
    let all_passed: bool = check::all_passed(results);
    if cfg.quiet > 1 {
        return all_passed;
    }

    print::header(title, cfg.quiet);
    for result in results {
        print::tree_head(&format::result_glyph(result.passed).to_string(), &result.name);
        print::tree_leaf(&format::result_message(result));
    }
    mprint!();
    print::print_status(format::summary(passed, results.len()).to_string());
    all_passed
}

fn print_verdict(all_passed: bool, cfg: &Config) {
    if cfg.quiet == 0 {
        print::fat_separator();
    }
    print::centerln(&format::verdict(all_passed).to_string());
    if cfg.quiet == 0 {
        print::fat_separator();
    }
}
