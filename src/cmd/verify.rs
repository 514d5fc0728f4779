use crate::reports;
use clap::Args;
use collatz::config::Config;
use collatz::error::{CollatzError, CzResult};
use collatz::verify::verify_range;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = 1)]
    pub from: u64,

    #[arg(short = 'n', long)]
    pub up_to: u64,
}

pub fn run(args: VerifyArgs) -> CzResult<()> {
    let started = Instant::now();
    let report = verify_range(args.from, args.up_to, &args.config.generator)?;
    info!(
        "Checked {} starts in {:.2}s",
        report.checked(),
        started.elapsed().as_secs_f64()
    );

    reports::print_verify_report(&report, &args.config.display);

    if report.is_clean() {
        Ok(())
    } else {
        Err(CollatzError::VerificationFailed(report.failures.len()))
    }
}
