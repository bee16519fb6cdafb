//! Filter a package list against a threshold Go version.
//!
//! The scanner is pure: it does not log. Every package that does not make it
//! into the results is returned as a [`Skip`] so the caller can decide how
//! to report it.

use crate::package::Package;
use crate::report::WhyGoOverResults;
use crate::version::GoVersion;

/// Why a package did not contribute to the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The package has no module (standard library).
    NoModule,
    /// The package belongs to the project being scanned.
    MainModule,
    /// The module does not declare a Go version.
    NoGoVersion,
    /// The declared Go version is not valid semver.
    InvalidGoVersion(String),
    /// The required version is at or below the threshold.
    NotOverThreshold(GoVersion),
}

/// A package left out of the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    pub package: String,
    /// `module@version`, when the package has a module.
    pub module: Option<String>,
    pub reason: SkipReason,
}

/// Outcome of [`scan`].
#[derive(Debug, Clone, Default)]
pub struct Scan {
    pub results: WhyGoOverResults,
    pub skipped: Vec<Skip>,
}

/// Group the modules of `packages` that require a Go version strictly newer
/// than `threshold`. Packages of `current_module_path` are excluded.
pub fn scan(packages: &[Package], current_module_path: &str, threshold: &GoVersion) -> Scan {
    let mut out = Scan::default();

    for pkg in packages {
        let skip = |module: Option<String>, reason| Skip {
            package: pkg.import_path.clone(),
            module,
            reason,
        };

        let Some(module) = pkg.module.as_ref() else {
            out.skipped.push(skip(None, SkipReason::NoModule));
            continue;
        };
        let module_id = module.id();

        if module.path == current_module_path {
            out.skipped.push(skip(Some(module_id), SkipReason::MainModule));
            continue;
        }
        if module.go_version.is_empty() {
            out.skipped.push(skip(Some(module_id), SkipReason::NoGoVersion));
            continue;
        }

        let required = match GoVersion::parse(&module.go_version) {
            Ok(v) => v,
            Err(_) => {
                let reason = SkipReason::InvalidGoVersion(module.go_version.clone());
                out.skipped.push(skip(Some(module_id), reason));
                continue;
            }
        };

        if required.compare(threshold).is_le() {
            out.skipped
                .push(skip(Some(module_id), SkipReason::NotOverThreshold(required)));
            continue;
        }

        out.results.insert(required, module_id);
    }

    out
}
