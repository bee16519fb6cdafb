use std::cell::{Cell, RefCell};

use wgo_core::package::{Module, Package};
use wgo_ops::loader::PackagesLoader;
use wgo_ops::ops_why::{self, WhyOptions};
use wgo_util::errors::WgoError;

/// Returns a fixed package list and records how it was called.
#[derive(Default)]
struct StubLoader {
    packages: Vec<Package>,
    calls: Cell<usize>,
    patterns: RefCell<Vec<String>>,
}

impl StubLoader {
    fn with(packages: Vec<Package>) -> Self {
        Self {
            packages,
            ..Self::default()
        }
    }
}

impl PackagesLoader for StubLoader {
    async fn load(&self, patterns: &[&str]) -> Result<Vec<Package>, WgoError> {
        self.calls.set(self.calls.get() + 1);
        self.patterns
            .borrow_mut()
            .extend(patterns.iter().map(|p| p.to_string()));
        Ok(self.packages.clone())
    }
}

struct FailingLoader;

impl PackagesLoader for FailingLoader {
    async fn load(&self, _patterns: &[&str]) -> Result<Vec<Package>, WgoError> {
        Err(WgoError::Loader {
            message: "go: go.mod file not found".to_string(),
        })
    }
}

fn dep(path: &str, version: &str, go_version: &str) -> Package {
    Package {
        import_path: path.to_string(),
        module: Some(Module {
            path: path.to_string(),
            version: version.to_string(),
            go_version: go_version.to_string(),
        }),
    }
}

#[tokio::test]
async fn reports_dependencies_over_threshold() {
    let loader = StubLoader::with(vec![
        dep("a", "v1.0.0", "1.22"),
        dep("b", "v2.0.0", "1.20"),
        dep("c", "v1.0.0", "1.22"),
    ]);

    let results = ops_why::why_go_over(&loader, "example.com/me", "1.21")
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(
        results.get("v1.22").unwrap(),
        ["a@v1.0.0".to_string(), "c@v1.0.0".to_string()]
    );
    assert_eq!(results.to_string(), "# Go v1.22\na@v1.0.0\nc@v1.0.0\n");
    assert_eq!(loader.calls.get(), 1);
    assert_eq!(*loader.patterns.borrow(), vec!["all".to_string()]);
}

#[tokio::test]
async fn self_module_is_excluded() {
    let loader = StubLoader::with(vec![
        dep("example.com/me", "", "1.99"),
        dep("other", "v0.3.0", "1.99"),
    ]);

    let results = ops_why::why_go_over(&loader, "example.com/me", "1.21")
        .await
        .unwrap();

    assert_eq!(results.to_string(), "# Go v1.99\nother@v0.3.0\n");
}

#[tokio::test]
async fn invalid_threshold_fails_before_loading() {
    let loader = StubLoader::with(vec![dep("a", "v1.0.0", "1.22")]);

    let err = ops_why::why_go_over(&loader, "me", "invalid-version")
        .await
        .unwrap_err();

    assert!(
        err.to_string().contains("is not a valid semver"),
        "got: {err}"
    );
    assert_eq!(loader.calls.get(), 0);
}

#[tokio::test]
async fn empty_dependency_list_fails() {
    let loader = StubLoader::with(Vec::new());

    let err = ops_why::why_go_over(&loader, "me", "1.21")
        .await
        .unwrap_err();

    assert!(
        err.to_string().contains("no dependencies found"),
        "got: {err}"
    );
}

#[tokio::test]
async fn loader_failure_is_propagated() {
    let err = ops_why::why_go_over(&FailingLoader, "me", "1.21")
        .await
        .unwrap_err();

    assert!(
        err.to_string().contains("go.mod file not found"),
        "got: {err}"
    );
}

#[tokio::test]
async fn malformed_dependency_version_is_skipped() {
    let loader = StubLoader::with(vec![
        dep("rc", "v1.0.0", "1.21rc1"),
        dep("new", "v1.0.0", "1.23"),
    ]);

    let results = ops_why::why_go_over(&loader, "me", "1.21").await.unwrap();

    assert_eq!(results.to_string(), "# Go v1.23\nnew@v1.0.0\n");
}

#[tokio::test]
async fn nothing_over_threshold_gives_empty_report() {
    let loader = StubLoader::with(vec![dep("a", "v1.0.0", "1.20")]);

    let results = ops_why::why_go_over(&loader, "me", "v1.24.0").await.unwrap();

    assert!(results.is_empty());
    assert_eq!(results.to_string(), "");
}

#[tokio::test]
async fn run_reads_module_path_from_go_mod() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("go.mod");
    std::fs::write(&manifest_path, "module example.com/me\n\ngo 1.21\n").unwrap();

    let loader = StubLoader::with(vec![
        dep("example.com/me", "", "1.23"),
        dep("example.com/dep", "v1.4.0", "1.23"),
    ]);
    let opts = WhyOptions {
        release_version: "1.22".to_string(),
        manifest_path,
    };

    let results = ops_why::run(&loader, &opts).await.unwrap();

    assert_eq!(results.to_string(), "# Go v1.23\nexample.com/dep@v1.4.0\n");
}

#[tokio::test]
async fn run_without_go_mod_fails() {
    let dir = tempfile::tempdir().unwrap();
    let loader = StubLoader::with(vec![dep("a", "v1.0.0", "1.22")]);
    let opts = WhyOptions {
        release_version: "1.21".to_string(),
        manifest_path: dir.path().join("go.mod"),
    };

    let err = ops_why::run(&loader, &opts).await.unwrap_err();

    assert!(err.to_string().contains("go.mod"), "got: {err}");
    assert_eq!(loader.calls.get(), 0);
}
