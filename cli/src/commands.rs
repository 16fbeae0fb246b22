pub mod check;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use reachr_common::config::{Config, DEFAULT_PROJECT, DEFAULT_REGION};

#[derive(Parser, Debug)]
#[command(name = "reachr")]
#[command(version, about = "Connectivity checks for the graph analytics platform.")]
pub struct CommandLine {
    /// Cloud region used for discovery and bucket access
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Project name the instances, load balancer and bucket are named after
    #[arg(long, env = "PROJECT_NAME", default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Directory the JSON report is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Less output: -q drops banner and headers, -qq prints only the verdict
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            output_dir: self.output_dir.clone(),
            no_banner: self.no_banner,
            quiet: self.quiet,
            ..Config::new(&self.region, &self.project)
        }
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
