//! Top-level facade crate for the flypool exporter.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use flypool_core::*;
}

pub mod exporter {
    pub use flypool_exporter::*;
}
