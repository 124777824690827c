//! Shape model for jewelry pattern elements.

use lyon::path::Path;

mod link;
mod ring;

pub use link::{ChainLink, LINK_SAMPLES};
pub use ring::JumpRing;

/// A point in design space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin of the design space; all pattern shapes are centered here.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Geometry every pattern shape provides to the renderer.
pub trait DesignShape {
    /// Outline of the shape as a lyon path. Shapes are drawn unfilled.
    fn render(&self) -> Path;

    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
    fn bounds(&self) -> (f64, f64, f64, f64);
}

#[derive(Debug, Clone)]
pub enum Shape {
    Ring(JumpRing),
    Link(ChainLink),
}

impl DesignShape for Shape {
    fn render(&self) -> Path {
        match self {
            Shape::Ring(s) => s.render(),
            Shape::Link(s) => s.render(),
        }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Ring(s) => s.bounds(),
            Shape::Link(s) => s.bounds(),
        }
    }
}
