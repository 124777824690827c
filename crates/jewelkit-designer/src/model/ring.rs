use lyon::math::point;
use lyon::path::Path;

use super::{DesignShape, Point};

/// An open wire ring, drawn as an unfilled circle.
#[derive(Debug, Clone)]
pub struct JumpRing {
    pub center: Point,
    pub radius: f64,
}

impl JumpRing {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl DesignShape for JumpRing {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            point(self.center.x as f32, self.center.y as f32),
            self.radius as f32,
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}
