//! Error handling for JewelKit
//!
//! The design layer has exactly one recoverable failure: a pattern style
//! outside the supported set. Everything else in the core is pure
//! arithmetic and geometry with no error conditions.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design error type
///
/// Represents errors raised while turning a style selection into a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// Requested pattern style is not one of the supported styles
    #[error("Invalid pattern style {style:?}. Choose 'spiral' or 'repeating'.")]
    InvalidPatternStyle {
        /// The style name as received, possibly empty when nothing was selected.
        style: String,
    },
}

/// Main error type for JewelKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Design error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a design error
    pub fn is_design_error(&self) -> bool {
        matches!(self, Error::Design(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
