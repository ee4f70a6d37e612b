//! mallnav - indoor mall navigation from the command line

use std::io;
use std::process::ExitCode;

use clap::Parser;
use mallnav::{App, AppConfig, cli::Cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = AppConfig::discover(cli.config.as_deref())
        .map(|config| config.with_data_dir(cli.data))
        .and_then(App::load)
        .and_then(|app| app.run(cli.command, &mut io::stdout().lock()));

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
