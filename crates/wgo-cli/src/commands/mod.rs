//! Command handlers.

mod why;

use miette::Result;

use crate::cli::Cli;

/// Run the report described by a parsed CLI invocation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    why::exec(cli.release_version, cli.go).await
}
