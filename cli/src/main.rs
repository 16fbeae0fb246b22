mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use reachr_common::config::Config;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    let all_passed: bool = check::check(&cfg).await?;

    print::end_of_program(cfg.quiet);
    Ok(if all_passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
