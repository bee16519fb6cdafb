//! Go toolchain version parsing and comparison.
//!
//! Go module versions follow semver with a leading `v`, and additionally
//! accept the shorthand forms `vMAJOR` and `vMAJOR.MINOR`, which compare as
//! if the missing components were `0`. Shorthand forms may not carry a
//! prerelease or build suffix.
//!
//! Numeric components must fit in a `u64`. Go accepts digits of any length,
//! so a component such as `18446744073709551616` is valid there but rejected
//! here as an invalid version.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;

use wgo_util::errors::WgoError;

/// A normalized Go version such as `v1.22` or `v1.21.3`.
///
/// The original spelling (with the `v` prefix added if it was missing) is
/// kept for display, so `1.22` and `1.22.0` remain distinct values even
/// though [`GoVersion::compare`] considers them equal.
#[derive(Debug, Clone)]
pub struct GoVersion {
    original: String,
    semver: Version,
}

impl GoVersion {
    /// Normalize `input` by adding the `v` prefix if absent, then validate it.
    pub fn parse(input: &str) -> Result<Self, WgoError> {
        let original = if input.starts_with('v') {
            input.to_string()
        } else {
            format!("v{input}")
        };

        let semver = parse_go_semver(&original[1..]).ok_or_else(|| WgoError::InvalidVersion {
            version: input.to_string(),
        })?;

        Ok(Self { original, semver })
    }

    /// Three-way comparison by semver precedence. Build metadata is ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.semver.cmp_precedence(&other.semver)
    }

    /// The normalized string, always starting with `v`.
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

/// Expand the Go shorthand forms and hand the result to the semver parser.
fn parse_go_semver(body: &str) -> Option<Version> {
    let suffix_at = body.find(['-', '+']).unwrap_or(body.len());
    let (core, suffix) = body.split_at(suffix_at);

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() > 3 || (parts.len() < 3 && !suffix.is_empty()) {
        return None;
    }
    if parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let mut full = parts.join(".");
    for _ in parts.len()..3 {
        full.push_str(".0");
    }
    full.push_str(suffix);

    Version::parse(&full).ok()
}

impl PartialEq for GoVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GoVersion {}

impl Ord for GoVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
            .then_with(|| self.original.cmp(&other.original))
    }
}

impl PartialOrd for GoVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for GoVersion {
    type Err = WgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
