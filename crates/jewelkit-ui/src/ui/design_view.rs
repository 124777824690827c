//! # Design View
//!
//! The single view of the application: pattern style selector, generate
//! trigger, and the rendered pattern preview.

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, ComboBoxText, Frame, Label, Orientation, Picture};
use std::cell::RefCell;
use std::rc::Rc;

use jewelkit_designer::renderer::{render_pattern, DrawingSurface};
use jewelkit_designer::{JewelryDesign, PatternStyle};

/// Edge length of the square preview canvas in pixels.
const CANVAS_SIZE: i32 = 500;

/// Design view widget tree.
pub struct DesignView {
    pub widget: Box,
}

impl DesignView {
    pub fn new() -> Self {
        let content = Box::new(Orientation::Vertical, 12);
        content.set_margin_start(12);
        content.set_margin_end(12);
        content.set_margin_top(12);
        content.set_margin_bottom(12);

        let title = Label::builder()
            .label("Fibonacci Jewelry Design")
            .css_classes(vec!["title-2"])
            .halign(Align::Start)
            .build();
        content.append(&title);

        // Style selector row
        let selector_row = Box::new(Orientation::Horizontal, 12);
        let style_label = Label::new(Some("Pattern Type:"));
        style_label.set_halign(Align::Start);
        selector_row.append(&style_label);

        let style_combo = ComboBoxText::new();
        for style in PatternStyle::ALL {
            style_combo.append(Some(style.name()), style.name());
        }
        // No initial selection: an unset selector flows through to the
        // builder as an invalid style rather than being pre-validated here.
        selector_row.append(&style_combo);
        content.append(&selector_row);

        let generate_button = Button::with_label("Generate Design");
        generate_button.set_halign(Align::Start);
        content.append(&generate_button);

        // Preview canvas
        let preview_frame = Frame::new(None);
        preview_frame.add_css_class("pattern-preview");
        let preview = Picture::new();
        preview.set_can_shrink(false);
        preview.set_size_request(CANVAS_SIZE, CANVAS_SIZE);
        preview_frame.set_child(Some(&preview));
        preview_frame.set_halign(Align::Start);
        content.append(&preview_frame);

        let status_label = Label::new(None);
        status_label.set_halign(Align::Start);
        status_label.add_css_class("caption");
        content.append(&status_label);

        // The surface is the one piece of state reused across clicks; the
        // renderer clears it before every draw.
        let surface = Rc::new(RefCell::new(
            DrawingSurface::new(CANVAS_SIZE as u32, CANVAS_SIZE as u32)
                .expect("Could not allocate the preview surface."),
        ));

        let combo_clone = style_combo.clone();
        let preview_clone = preview.clone();
        let status_clone = status_label.clone();
        let surface_clone = surface.clone();
        generate_button.connect_clicked(move |_| {
            let style = combo_clone
                .active_text()
                .map(|text| text.to_string())
                .unwrap_or_default();

            let design = JewelryDesign::default();
            match design.generate_pattern_named(&style) {
                Ok(pattern) => {
                    let mut surface = surface_clone.borrow_mut();
                    render_pattern(&pattern, &mut surface);
                    preview_clone.set_paintable(Some(&texture_for(surface.to_image())));

                    status_clone.remove_css_class("error");
                    status_clone.set_text(&format!(
                        "Generated {} pattern: {} elements",
                        pattern.style,
                        pattern.len()
                    ));
                    tracing::info!(
                        style = %pattern.style,
                        elements = pattern.len(),
                        "design generated"
                    );
                }
                Err(err) => {
                    status_clone.add_css_class("error");
                    status_clone.set_text(&err.to_string());
                    tracing::warn!(style = %style, %err, "pattern generation failed");
                }
            }
        });

        Self { widget: content }
    }
}

impl Default for DesignView {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a rendered image into a texture for the preview widget.
fn texture_for(image: image::RgbImage) -> gtk4::gdk::MemoryTexture {
    let (width, height) = image.dimensions();
    let buffer = glib::Bytes::from(&image.into_raw());
    gtk4::gdk::MemoryTexture::new(
        width as i32,
        height as i32,
        gtk4::gdk::MemoryFormat::R8g8b8,
        &buffer,
        width as usize * 3,
    )
}
