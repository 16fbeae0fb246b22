use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::colors;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub(crate) static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

pub fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS);
    pb.set_style(style);
    pb
}

/// Starts ticking with `msg`. Nothing is drawn before this is called.
pub fn start(msg: &str) {
    let pb = get_spinner();
    pb.set_message(msg.color(colors::TEXT_DEFAULT).to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
}

pub fn report_stage(msg: &str) {
    get_spinner().set_message(msg.color(colors::TEXT_DEFAULT).to_string());
}

pub fn report_check_progress(name: &str, idx: usize, total: usize) {
    get_spinner().set_message(format!(
        "Probing {} {}",
        name.color(colors::PRIMARY).bold(),
        format!("({}/{})", idx + 1, total).color(colors::SEPARATOR)
    ));
}

pub fn finish() {
    get_spinner().finish_and_clear();
}

/// Routes log output around the spinner so lines never tear it.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        get_spinner().suspend(|| io::stdout().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
