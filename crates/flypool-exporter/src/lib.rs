//! flypool exporter library entry.
//!
//! This crate wires config loading, the upstream client, the scrape loop and
//! exposition rendering into an axum service. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod router;
pub mod scrape;
pub mod transport;
pub mod upstream;

/// Address the binary listens on.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:9203";
