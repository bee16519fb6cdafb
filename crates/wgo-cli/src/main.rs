//! why-go-over CLI binary.
//!
//! This is the entry point for the `why-go-over` command-line tool. It
//! parses arguments with `clap`, initializes logging via `tracing`, and
//! runs the report for the Go module in the current directory.

mod cli;
mod commands;

use miette::Result;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the report.
///
/// `--debug` (or `WGO_DEBUG`) forces the `debug` level; otherwise
/// `RUST_LOG` is honoured, defaulting to `warn`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = cli::parse();
    init_tracing(args.debug);
    tracing::debug!(?args, "parsed arguments");

    commands::dispatch(args).await
}
