//! CLI argument definitions for why-go-over.

use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "why-go-over",
    version,
    about = "Find the dependencies that require a newer Go than a given release",
    long_about = "Lists every module in the build of the Go module in the current directory \
                  whose `go` directive is newer than RELEASE_VERSION, grouped by the Go version \
                  they require."
)]
pub struct Cli {
    /// A release version of Go, e.g. 1.21 or v1.22.3 (release candidates are not supported)
    #[arg(value_name = "RELEASE_VERSION")]
    pub release_version: String,

    /// Enable debug logging
    #[arg(long, env = "WGO_DEBUG", value_parser = BoolishValueParser::new())]
    pub debug: bool,

    /// Go binary used to list packages
    #[arg(long, env = "WGO_GO", default_value = "go", value_name = "PATH")]
    pub go: String,
}

/// Parse the process arguments.
///
/// clap's generated version flag is long-only, so it is replaced by one
/// that also answers to `-v`.
pub fn parse() -> Cli {
    let matches = Cli::command()
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Show the version of why-go-over"),
        )
        .get_matches();

    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}
