//! Operation: report dependencies that require a Go version newer than a threshold.

use std::path::PathBuf;

use wgo_core::gomod::GoMod;
use wgo_core::report::WhyGoOverResults;
use wgo_core::scan::{self, Scan, Skip, SkipReason};
use wgo_core::version::GoVersion;
use wgo_util::errors::{WgoError, WgoResult};

use crate::loader::{PackagesLoader, ALL};

/// Options for a `why-go-over` run.
#[derive(Debug, Clone)]
pub struct WhyOptions {
    /// Threshold Go version as typed by the user, with or without the `v`.
    pub release_version: String,
    /// Path to the project's `go.mod`.
    pub manifest_path: PathBuf,
}

impl Default for WhyOptions {
    fn default() -> Self {
        Self {
            release_version: String::new(),
            manifest_path: PathBuf::from("go.mod"),
        }
    }
}

/// Read the project's `go.mod`, then run [`why_go_over`] for its module.
pub async fn run<L: PackagesLoader>(loader: &L, opts: &WhyOptions) -> WgoResult<WhyGoOverResults> {
    let go_mod = GoMod::from_path(&opts.manifest_path)?;
    tracing::debug!(
        module = %go_mod.module,
        go = go_mod.go.as_deref().unwrap_or("-"),
        toolchain = go_mod.toolchain.as_deref().unwrap_or("-"),
        "read {}",
        opts.manifest_path.display()
    );

    why_go_over(loader, &go_mod.module, &opts.release_version).await
}

/// Group the dependencies of `current_module_path` that require a Go version
/// strictly newer than `release_version`.
///
/// The threshold is validated before anything is loaded. Fails if the
/// loader fails or returns no packages. Dependencies with a malformed Go
/// version are logged and skipped.
pub async fn why_go_over<L: PackagesLoader>(
    loader: &L,
    current_module_path: &str,
    release_version: &str,
) -> WgoResult<WhyGoOverResults> {
    let threshold = GoVersion::parse(release_version)?;

    let sp = wgo_util::progress::spinner("Loading packages...");
    let packages = loader.load(&[ALL]).await;
    sp.finish_and_clear();
    let packages = packages?;

    tracing::debug!(len = packages.len(), "loaded packages");
    if packages.is_empty() {
        return Err(WgoError::NoDependencies.into());
    }

    let Scan { results, skipped } = scan::scan(&packages, current_module_path, &threshold);
    for skip in &skipped {
        log_skip(skip);
    }
    for (required, modules) in results.iter() {
        for module in modules {
            tracing::debug!(module = %module, required_go = %required, "over threshold");
        }
    }

    Ok(results)
}

fn log_skip(skip: &Skip) {
    let module = skip.module.as_deref().unwrap_or("-");
    match skip.reason {
        SkipReason::InvalidGoVersion(ref declared) => {
            tracing::warn!(module, "Go version `{declared}` is not a valid semver");
        }
        SkipReason::NotOverThreshold(ref required) => {
            tracing::debug!(module, required_go = %required, "not over threshold");
        }
        SkipReason::NoModule | SkipReason::MainModule | SkipReason::NoGoVersion => {
            tracing::debug!(pkg = %skip.package, reason = ?skip.reason, "skip");
        }
    }
}
