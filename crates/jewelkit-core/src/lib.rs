//! Foundation crate for JewelKit.
//!
//! Holds the pieces the rest of the workspace builds on:
//! - The error taxonomy (`DesignError`, unified [`Error`], [`Result`])
//! - The bounded Fibonacci sequence generator used as the sizing basis for
//!   every pattern style

pub mod error;
pub mod sequence;

pub use error::{DesignError, Error, Result};
pub use sequence::{generate_sequence, DEFAULT_MAX_VALUE};
