//! flypool core: exposition formatting, upstream statistics model, and errors.
//!
//! This crate holds the pure parts of the exporter: turning numbers into
//! exposition text and decoding pool payloads. It carries no transport or
//! runtime dependencies so it can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed upstream payloads degrade to zero values instead of crashing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;
pub mod stats;

/// Shared result type.
pub use error::{ExporterError, Result};
