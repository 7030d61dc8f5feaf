//! Shared utilities for the floor area crates.
//!
//! Conversions from Polars `AnyValue` cells to the typed values the estimator
//! works with, and the numeric formatting used for CSV output.

pub mod values;

pub use values::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, format_numeric, parse_f64,
    parse_i64,
};
