use std::f64::consts::PI;

use lyon::math::point;
use lyon::path::Path;

use super::{DesignShape, Point};

/// Sample count for the link outline, one full turn.
pub const LINK_SAMPLES: usize = 100;

/// A chain link, drawn as an unfilled ellipse twice as long as it is tall.
#[derive(Debug, Clone)]
pub struct ChainLink {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl ChainLink {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    /// Builds a link from a pattern element size: the horizontal semi-axis
    /// is half the size, the vertical semi-axis a quarter of it.
    pub fn from_size(center: Point, size: f64) -> Self {
        Self::new(center, size / 2.0, size / 4.0)
    }
}

impl DesignShape for ChainLink {
    /// Outline sampled as a closed parametric curve over a full turn.
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        for i in 0..LINK_SAMPLES {
            let theta = 2.0 * PI * (i as f64) / (LINK_SAMPLES as f64);
            let x = self.center.x + self.rx * theta.cos();
            let y = self.center.y + self.ry * theta.sin();
            let p = point(x as f32, y as f32);
            if i == 0 {
                builder.begin(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.end(true);
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.rx,
            self.center.y - self.ry,
            self.center.x + self.rx,
            self.center.y + self.ry,
        )
    }
}
