//! Entry point for the `itinera` binary.
#![forbid(unsafe_code)]

use itinera_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match itinera_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    }
}

/// Send `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
    {
        log::debug!("keeping the existing log subscriber: {err}");
    }
}

#[expect(clippy::print_stderr, reason = "the binary reports failures on stderr")]
fn report(err: &CliError) {
    eprintln!("itinera: {err}");
}
