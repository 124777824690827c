//! Pattern generation from a Fibonacci sequence.
//!
//! A pattern is an ordered list of (shape kind, size) elements. Two styles
//! are supported: a spiral of concentric jump-rings, one per sequence
//! value, and a repeating chain where each value contributes a growing
//! group of identical links.

use std::fmt;
use std::str::FromStr;

use jewelkit_core::DesignError;

/// Number of links in the first repeating group. Each subsequent sequence
/// value gets one more link than the previous.
pub const INITIAL_GROUP_SIZE: usize = 16;

/// Closed set of pattern styles the builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternStyle {
    /// Concentric jump-rings, one per sequence value.
    Spiral,
    /// Growing groups of identical chain links.
    Repeating,
}

impl PatternStyle {
    /// All selectable styles, in presentation order.
    pub const ALL: [PatternStyle; 2] = [PatternStyle::Spiral, PatternStyle::Repeating];

    /// Returns the selector name of the style.
    pub fn name(&self) -> &'static str {
        match self {
            PatternStyle::Spiral => "spiral",
            PatternStyle::Repeating => "repeating",
        }
    }
}

impl fmt::Display for PatternStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternStyle {
    type Err = DesignError;

    /// Parses a selector name. Anything outside the closed set, including
    /// the empty string from an unset selector, is an invalid style.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spiral" => Ok(PatternStyle::Spiral),
            "repeating" => Ok(PatternStyle::Repeating),
            other => Err(DesignError::InvalidPatternStyle {
                style: other.to_string(),
            }),
        }
    }
}

/// Kinds of pattern elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    JumpRing,
    ChainLink,
}

/// One entry of a pattern: a shape kind and its size drawn from the
/// sequence. An element has no identity beyond its position; list order is
/// draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternElement {
    pub kind: ElementKind,
    pub size: u64,
}

impl PatternElement {
    pub fn new(kind: ElementKind, size: u64) -> Self {
        Self { kind, size }
    }
}

/// Represents a generated jewelry pattern.
///
/// Produced fresh per generation request and consumed by the renderer;
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub style: PatternStyle,
    pub elements: Vec<PatternElement>,
}

impl Pattern {
    /// Creates an empty pattern of the given style.
    pub fn new(style: PatternStyle) -> Self {
        Self {
            style,
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements in the pattern.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true when the pattern has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Builds a pattern from a sequence according to the selected style.
///
/// Pure function: the same sequence and style always produce an identical
/// pattern.
pub fn build_pattern(sequence: &[u64], style: PatternStyle) -> Pattern {
    let mut pattern = Pattern::new(style);
    match style {
        PatternStyle::Spiral => {
            pattern.elements = sequence
                .iter()
                .map(|&value| PatternElement::new(ElementKind::JumpRing, value))
                .collect();
        }
        PatternStyle::Repeating => {
            let mut group_size = INITIAL_GROUP_SIZE;
            for &value in sequence {
                pattern.elements.extend(
                    std::iter::repeat(PatternElement::new(ElementKind::ChainLink, value))
                        .take(group_size),
                );
                group_size += 1;
            }
        }
    }
    pattern
}
