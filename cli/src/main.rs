use std::io::{self, IsTerminal};
use std::process::ExitCode;

use frontend::TargetArch;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod report;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match frontend::load(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            print!("{}", err.message());
            return ExitCode::from(err.exit_code());
        }
    };
    debug!(?config, "loaded configuration");

    if config.target_arch().is_none() {
        warn!(
            arch = config.arch(),
            "unrecognized architecture, expected one of {}",
            TargetArch::known_names()
        );
    }
    if let Some(phase) = config.phases().first_halt() {
        info!(%phase, "pipeline would halt early");
    }

    if let Err(err) = report::write_report(&config, &mut io::stdout().lock()) {
        eprintln!("failed to write configuration: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
