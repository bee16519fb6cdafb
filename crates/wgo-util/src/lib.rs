//! Shared utilities for why-go-over.
//!
//! This crate provides the cross-cutting concerns used by the other crates:
//! the error type, external process spawning, and terminal progress
//! indicators.

pub mod errors;
pub mod process;
pub mod progress;
