//! The grouped result of a scan and its text rendering.

use std::collections::BTreeMap;
use std::fmt;

use crate::version::GoVersion;

/// Dependencies grouped by the Go version they require.
///
/// Keys iterate in ascending version order. Each key holds `module@version`
/// identifiers in first-seen order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhyGoOverResults {
    entries: BTreeMap<GoVersion, Vec<String>>,
}

impl WhyGoOverResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `module_id` under `required`. Returns `false` if it was already listed there.
    pub fn insert(&mut self, required: GoVersion, module_id: String) -> bool {
        let modules = self.entries.entry(required).or_default();
        if modules.contains(&module_id) {
            return false;
        }
        modules.push(module_id);
        true
    }

    /// Modules listed under the version spelled exactly as `version`.
    pub fn get(&self, version: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == version)
            .map(|(_, v)| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct version keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate keys in ascending version order.
    pub fn iter(&self) -> impl Iterator<Item = (&GoVersion, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl fmt::Display for WhyGoOverResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (version, modules) in self.iter() {
            writeln!(f, "# Go {version}")?;
            for module in modules {
                writeln!(f, "{module}")?;
            }
        }
        Ok(())
    }
}
