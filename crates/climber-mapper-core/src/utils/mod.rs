//! Utility functions for string formatting.

pub mod format;

pub use format::{format_optional, format_pair, pad_left, MISSING};
