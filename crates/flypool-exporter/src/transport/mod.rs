//! Transport layer (HTTP).
//!
//! Exposes the landing page and the scrape endpoint.

pub mod http;
