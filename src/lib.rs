//! # JewelKit
//!
//! A Rust-based jewelry pattern designer that derives ring and chain-link
//! layouts from the Fibonacci sequence and previews them in a desktop window.
//!
//! ## Architecture
//!
//! JewelKit is organized as a workspace with multiple crates:
//!
//! 1. **jewelkit-core** - Error taxonomy and the Fibonacci sequence generator
//! 2. **jewelkit-designer** - Shape model, pattern builder, software renderer
//! 3. **jewelkit-ui** - GTK interface: style selector, trigger, preview canvas
//! 4. **jewelkit** - Main binary that integrates all crates
//!
//! ## Features
//!
//! - **Pattern Styles**: concentric jump-ring spirals and repeating chain links
//! - **Deterministic Generation**: identical patterns for identical bounds
//! - **Software Rendering**: anti-aliased, equal-aspect preview at 500x500

// Re-export modules for main.rs
pub use jewelkit_designer as designer;
pub use jewelkit_ui::ui;

pub use jewelkit_core::{
    generate_sequence, DesignError, Error, Result, DEFAULT_MAX_VALUE,
};

pub use jewelkit_designer::{
    build_pattern, pattern_shapes, render_pattern, ChainLink, DesignShape, DrawingSurface,
    ElementKind, JewelryDesign, JumpRing, Pattern, PatternElement, PatternStyle, Point, Shape,
    Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
