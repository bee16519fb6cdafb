use serde::{Deserialize, Serialize};

/// A package as reported by `go list -json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub import_path: String,
    /// The module containing the package. Absent for standard library packages.
    #[serde(default)]
    pub module: Option<Module>,
}

/// Module metadata attached to a [`Package`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Module {
    pub path: String,
    /// Selected version. Empty for the main module and directory replacements.
    #[serde(default)]
    pub version: String,
    /// Minimum Go version from the module's `go` directive. Empty when undeclared.
    #[serde(default)]
    pub go_version: String,
}

impl Module {
    /// `path@version` identifier used in reports.
    pub fn id(&self) -> String {
        format!("{}@{}", self.path, self.version)
    }
}
