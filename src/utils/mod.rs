//! Utility modules shared across the pipeline
//!
//! - Formatting: rounding and centimetre display strings

pub mod formatting;

pub use formatting::{format_cm, format_signed_cm, round_to};
