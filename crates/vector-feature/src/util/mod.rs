//! Utility modules for the feature model.

pub mod numeric;

pub use numeric::{format_general, parse_integer_prefix, parse_real_prefix};
