//! TLE harness common types and errors.
//!
//! This crate provides foundational types shared across th-core modules:
//! - The unified error type and its stable codes
//! - Sampling parameters attached to each scanned record
//! - Constants of the two-line element format

pub mod error;
pub mod params;

pub use error::{Error, Result};
pub use params::SampleParameters;

/// Width of one element line in the standard two-line format.
pub const LINE_LENGTH: usize = 69;

/// Label given to every record the harness builds.
pub const RECORD_NAME: &str = "Test";
