//! JSON export of a finished run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use reachr_common::models::report::Report;

const FILE_PREFIX: &str = "connectivity_test_";

/// Local wall-clock time as `YYYYmmdd_HHMMSS`.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn file_name(timestamp: &str) -> String {
    format!("{FILE_PREFIX}{timestamp}.json")
}

/// Writes `report` as pretty JSON into `dir` and returns the file path.
pub fn write(report: &Report, dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let path = dir.join(file_name(&report.timestamp));
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
