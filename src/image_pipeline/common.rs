//! Common types module
//!
//! The error type and result alias shared by every stage of the bitmap pipeline.

pub mod error;

pub use error::{ConversionError, Result};
