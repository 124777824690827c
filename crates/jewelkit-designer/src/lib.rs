//! # JewelKit Designer
//!
//! This crate turns a bounded Fibonacci sequence into a jewelry pattern and
//! renders it to an image buffer for display in the UI.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Pattern**: ordered list of (shape kind, size) elements built from the
//!   sequence in either spiral or repeating style
//! - **Model**: jump-ring and chain-link shapes expressed as lyon paths
//! - **Viewport**: uniform-scale world/pixel mapping for the preview canvas
//! - **Renderer**: strokes a pattern onto a reusable drawing surface
//!
//! ## Architecture
//!
//! ```text
//! JewelryDesign (sequence bound)
//!   ├── Pattern (spiral | repeating)
//!   └── Shapes (jump rings, chain links)
//!
//! DrawingSurface (pixmap + viewport)
//!   └── render_pattern (fit, stroke, no axes)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use jewelkit_designer::{render_pattern, DrawingSurface, JewelryDesign, PatternStyle};
//!
//! let design = JewelryDesign::default();
//! let pattern = design.generate_pattern(PatternStyle::Spiral);
//!
//! let mut surface = DrawingSurface::new(500, 500).unwrap();
//! render_pattern(&pattern, &mut surface);
//! let preview = surface.to_image();
//! # assert_eq!(preview.width(), 500);
//! ```

pub mod design;
pub mod model;
pub mod pattern;
pub mod renderer;
pub mod viewport;

// Re-export all public types from submodules
pub use design::JewelryDesign;
pub use model::{ChainLink, DesignShape, JumpRing, Point, Shape};
pub use pattern::{
    build_pattern, ElementKind, Pattern, PatternElement, PatternStyle, INITIAL_GROUP_SIZE,
};
pub use renderer::{pattern_shapes, render_pattern, DrawingSurface, LINK_SAMPLES};
pub use viewport::Viewport;
