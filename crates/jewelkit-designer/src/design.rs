//! The design object tying sequence and pattern generation together.

use jewelkit_core::sequence::{generate_sequence, DEFAULT_MAX_VALUE};
use jewelkit_core::Result;

use crate::pattern::{build_pattern, Pattern, PatternStyle};

/// A jewelry design parameterized by the sequence bound.
///
/// The sequence is computed once at construction and reused for every
/// pattern the design generates.
#[derive(Debug, Clone)]
pub struct JewelryDesign {
    max_value: u64,
    sequence: Vec<u64>,
}

impl JewelryDesign {
    /// Creates a design whose sequence is bounded by `max_value`.
    pub fn new(max_value: u64) -> Self {
        Self {
            max_value,
            sequence: generate_sequence(max_value),
        }
    }

    /// The bound the sequence was generated with.
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// The underlying Fibonacci sequence.
    pub fn sequence(&self) -> &[u64] {
        &self.sequence
    }

    /// Generates a pattern in the given style.
    pub fn generate_pattern(&self, style: PatternStyle) -> Pattern {
        let pattern = build_pattern(&self.sequence, style);
        tracing::debug!(
            style = %style,
            elements = pattern.len(),
            "generated pattern"
        );
        pattern
    }

    /// Generates a pattern from a style selector name.
    ///
    /// This is the UI-facing entry point: the name comes straight from the
    /// selector widget and may be empty when nothing is selected, which
    /// fails like any other unknown style.
    pub fn generate_pattern_named(&self, style: &str) -> Result<Pattern> {
        let style = style.parse::<PatternStyle>()?;
        Ok(self.generate_pattern(style))
    }
}

impl Default for JewelryDesign {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VALUE)
    }
}
