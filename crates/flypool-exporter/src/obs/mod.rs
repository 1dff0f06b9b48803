//! Exposition output.
//!
//! Turns scraped account samples into the text body served on `/metrics`.

pub mod metrics;
