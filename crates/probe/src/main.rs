//! Alarm Probe - Main Entry Point
//! Prints the banner report the alarm application uses to verify script actions

mod logging;

use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use alarm_probe_core::application::ProbeService;
use alarm_probe_core::port::SystemTimeProvider;
use alarm_probe_core::ProbeError;
use alarm_probe_infra_system::BuildRuntimeInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // 1. Initialize logging (stderr only)
    if let Err(e) = logging::init_logging() {
        eprintln!("alarm-probe: logging disabled: {:#}", e);
    }

    debug!("Alarm Probe v{} starting...", VERSION);

    let ignored_args = std::env::args_os().skip(1).count();
    if ignored_args > 0 {
        debug!(ignored_args, "Command-line arguments are ignored");
    }

    // 2. Emit the report. The exit status is success no matter what happened.
    if let Err(e) = run() {
        if e
            .downcast_ref::<ProbeError>()
            .is_some_and(ProbeError::is_broken_pipe)
        {
            debug!("Stdout closed before the report was written");
        } else {
            error!(error = ?e, "Probe report failed");
        }
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    // DI wiring
    let service = ProbeService::new(
        Arc::new(SystemTimeProvider),
        Arc::new(BuildRuntimeInfo::new()),
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let report = service
        .emit(&mut out)
        .context("Failed to write probe report")?;

    info!(
        timestamp = %report.formatted_timestamp(),
        runtime_version = %report.runtime_version,
        "Probe report emitted"
    );

    Ok(())
}
