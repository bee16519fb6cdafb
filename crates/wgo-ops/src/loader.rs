//! Package graph loading.

use std::future::Future;
use std::path::PathBuf;

use wgo_core::package::Package;
use wgo_util::errors::WgoError;
use wgo_util::process::CommandBuilder;

/// Pattern matching every package in the main module's build list.
pub const ALL: &str = "all";

/// A capability that lists packages together with their module metadata.
pub trait PackagesLoader {
    fn load(&self, patterns: &[&str]) -> impl Future<Output = Result<Vec<Package>, WgoError>>;
}

/// Loads packages by running `go list -json`.
#[derive(Debug, Clone)]
pub struct GoListLoader {
    go: String,
    dir: Option<PathBuf>,
}

impl GoListLoader {
    /// Use the given `go` program, resolved through `PATH` if not a path.
    pub fn new(go: impl Into<String>) -> Self {
        Self {
            go: go.into(),
            dir: None,
        }
    }

    /// Run `go list` in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    fn command(&self, patterns: &[&str]) -> CommandBuilder {
        let cmd = CommandBuilder::new(self.go.as_str())
            .args(["list", "-e", "-json=ImportPath,Module", "--"])
            .args(patterns.iter().copied());
        match self.dir {
            Some(ref dir) => cmd.cwd(dir),
            None => cmd,
        }
    }
}

impl Default for GoListLoader {
    fn default() -> Self {
        Self::new("go")
    }
}

impl PackagesLoader for GoListLoader {
    async fn load(&self, patterns: &[&str]) -> Result<Vec<Package>, WgoError> {
        let cmd = self.command(patterns);
        let output = cmd.exec().await.map_err(|e| WgoError::Loader {
            message: format!("failed to run `{}`: {e}", cmd.display()),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WgoError::Loader {
                message: format!("`{}` exited with {}: {}", cmd.display(), output.status, stderr.trim()),
            });
        }

        decode_packages(&output.stdout)
    }
}

/// Decode the stream of concatenated JSON objects printed by `go list -json`.
pub fn decode_packages(stdout: &[u8]) -> Result<Vec<Package>, WgoError> {
    serde_json::Deserializer::from_slice(stdout)
        .into_iter::<Package>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| WgoError::Loader {
            message: format!("malformed `go list` output: {e}"),
        })
}
