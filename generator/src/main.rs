use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use workflow::config::RunConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print the 200-entry DAC sine lookup table as C source on stderr"
)]
struct Args {
    /// Exit with status 1 after a successful run, as the legacy generator did
    #[arg(long, default_value_t = false)]
    legacy_exit_status: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let runner = Runner::new(RunConfig::from_args(args.legacy_exit_status));
    let stderr = io::stderr();
    let report = runner
        .execute(stderr.lock())
        .context("emitting sine lookup table")?;
    log::info!(
        "table emitted: {} bytes, fundamental ratio {:.1}",
        report.bytes_written,
        report.stats.fundamental_ratio
    );

    Ok(runner.config().exit_code())
}
