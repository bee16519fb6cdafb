//! Core types for why-go-over.
//!
//! This crate defines the Go version comparator, the `go.mod` reader, the
//! package records produced by `go list`, the threshold scanner and the
//! report it produces.
//!
//! This crate is intentionally free of async code, process spawning and
//! logging.

pub mod gomod;
pub mod package;
pub mod report;
pub mod scan;
pub mod version;
