use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all why-go-over operations.
#[derive(Debug, Error, Diagnostic)]
pub enum WgoError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A version string is not valid Go module semver.
    #[error("release version {version} is not a valid semver")]
    #[diagnostic(help("Pass a Go release version such as 1.22 or 1.22.3 (release candidates are not supported)"))]
    InvalidVersion { version: String },

    /// `go.mod` could not be read or parsed.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Run why-go-over from the directory containing go.mod"))]
    Manifest { message: String },

    /// The package graph could not be loaded.
    #[error("Failed to load packages: {message}")]
    Loader { message: String },

    /// The loader returned no packages at all.
    #[error("no dependencies found: maybe you are not in a go module project")]
    #[diagnostic(help("Check that the working directory is a Go module and `go list all` works there"))]
    NoDependencies,

    /// The operation was cancelled by an interrupt.
    #[error("interrupted")]
    Interrupted,
}

/// Convenience alias for `miette::Result<T>`.
pub type WgoResult<T> = miette::Result<T>;
