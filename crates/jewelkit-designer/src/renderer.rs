//! Pattern renderer for the preview canvas.
//!
//! Renders a pattern to an image buffer for display in the UI using
//! tiny-skia for high-quality 2D rendering. Every shape is stroked
//! unfilled around the shared origin, the viewport fit is uniform so
//! circles stay circles, and no axes or frame are drawn.

use image::{Rgb, RgbImage};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::model::{ChainLink, DesignShape, JumpRing, Point, Shape};
use crate::pattern::{ElementKind, Pattern};
use crate::viewport::Viewport;

pub use crate::model::LINK_SAMPLES;

/// Fraction of the canvas the fitted pattern may occupy.
const FIT_MARGIN: f64 = 0.9;

fn background_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(255, 255, 255, 255)
}
fn outline_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(0, 0, 0, 255)
}

/// The drawing surface patterns are rendered onto.
///
/// Owned by the UI shell and reused across renders; [`render_pattern`]
/// clears it before drawing, so prior contents never accumulate.
pub struct DrawingSurface {
    pixmap: Pixmap,
    viewport: Viewport,
}

impl DrawingSurface {
    /// Creates a surface of the given pixel size, filled with the
    /// background color. Returns `None` for zero dimensions.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let mut pixmap = Pixmap::new(width, height)?;
        pixmap.fill(background_color());
        Some(Self {
            pixmap,
            viewport: Viewport::new(width as f64, height as f64),
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The viewport used for the last render.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Resets the surface to the background color.
    pub fn clear(&mut self) {
        self.pixmap.fill(background_color());
    }

    /// True when no primitive has been drawn since the last clear.
    pub fn is_blank(&self) -> bool {
        // Background is opaque white, so every premultiplied byte is 255.
        self.pixmap.data().iter().all(|&byte| byte == 255)
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn pixel_data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Copies the surface into an RGB image for display.
    pub fn to_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            // Ignore alpha, the surface is opaque
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }
}

/// Converts pattern elements into origin-centered shapes, in draw order.
pub fn pattern_shapes(pattern: &Pattern) -> Vec<Shape> {
    pattern
        .elements
        .iter()
        .map(|element| {
            let size = element.size as f64;
            match element.kind {
                ElementKind::JumpRing => Shape::Ring(JumpRing::new(Point::ORIGIN, size)),
                ElementKind::ChainLink => Shape::Link(ChainLink::from_size(Point::ORIGIN, size)),
            }
        })
        .collect()
}

/// Renders a pattern onto the surface.
///
/// The surface is cleared first, then every shape is stroked in pattern
/// order with the viewport fitted around the union of their bounds. An
/// empty pattern leaves the surface blank.
pub fn render_pattern(pattern: &Pattern, surface: &mut DrawingSurface) {
    surface.clear();
    if pattern.is_empty() {
        return;
    }

    let shapes = pattern_shapes(pattern);

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for shape in &shapes {
        let (x1, y1, x2, y2) = shape.bounds();
        min_x = min_x.min(x1);
        min_y = min_y.min(y1);
        max_x = max_x.max(x2);
        max_y = max_y.max(y2);
    }
    surface
        .viewport
        .fit_to_bounds(min_x, min_y, max_x, max_y, FIT_MARGIN);

    let zoom = surface.viewport.zoom() as f32;
    let pan_x = surface.viewport.pan_x() as f32;
    let pan_y = surface.viewport.pan_y() as f32;
    let canvas_height = surface.viewport.canvas_height() as f32;

    // Transform: World -> Screen
    // pixel_x = world_x * zoom + pan_x
    // pixel_y = canvas_height - (world_y * zoom + pan_y)
    let transform = Transform::from_scale(zoom, -zoom).post_translate(pan_x, canvas_height - pan_y);

    let mut paint = Paint::default();
    paint.set_color(outline_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 1.0 / zoom,
        ..Default::default()
    };

    for shape in &shapes {
        if let Some(path) = to_skia_path(&shape.render()) {
            surface
                .pixmap
                .stroke_path(&path, &paint, &stroke, transform, None);
        }
    }

    tracing::debug!(
        style = %pattern.style,
        elements = pattern.len(),
        zoom,
        "rendered pattern"
    );
}

/// Converts a lyon path to a tiny-skia path.
fn to_skia_path(path: &lyon::path::Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => {
                pb.move_to(at.x, at.y);
            }
            lyon::path::Event::Line { from: _, to } => {
                pb.line_to(to.x, to.y);
            }
            lyon::path::Event::Quadratic { from: _, ctrl, to } => {
                pb.quad_to(ctrl.x, ctrl.y, to.x, to.y);
            }
            lyon::path::Event::Cubic {
                from: _,
                ctrl1,
                ctrl2,
                to,
            } => {
                pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
            }
            lyon::path::Event::End {
                last: _,
                first: _,
                close,
            } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}
