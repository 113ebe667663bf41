//! rtt-connector
//!
//! Reads line-delimited JSON requests on stdin and acknowledges each one
//! on stdout. Malformed lines are skipped.

use clap::Parser;
use rtt_sign::connector;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Acknowledge line-delimited JSON requests
#[derive(Parser)]
#[command(name = "rtt-connector")]
#[command(version, about)]
struct Args {
    /// Log each request to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default = if args.verbose {
        "rtt_sign=debug,rtt_connector=debug"
    } else {
        "rtt_sign=warn,rtt_connector=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match connector::run(stdin.lock(), stdout.lock()) {
        Ok(stats) => {
            info!(answered = stats.answered, skipped = stats.skipped, "input closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}
