//! Handler for `why-go-over <release-version>`.

use miette::Result;

use wgo_ops::loader::GoListLoader;
use wgo_ops::ops_why::{self, WhyOptions};
use wgo_util::errors::WgoError;

pub async fn exec(release_version: String, go: String) -> Result<()> {
    let opts = WhyOptions {
        release_version,
        ..WhyOptions::default()
    };
    let loader = GoListLoader::new(go);

    // Dropping the operation on interrupt kills the `go list` child.
    tokio::select! {
        res = ops_why::run(&loader, &opts) => {
            let results = res?;
            print!("{results}");
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => Err(WgoError::Interrupted.into()),
    }
}
