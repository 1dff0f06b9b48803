//! Exposition text primitives.
//!
//! Values are rendered as plain decimal strings and joined with a metric name
//! and a pre-built label set into `name{labels} value` lines. Nothing here
//! escapes or validates input; callers own the label text.

pub mod format;
pub mod labels;

pub use format::{compose_line, decimal_string, fixed_point_shift, integer_string};
pub use labels::account_labels;
