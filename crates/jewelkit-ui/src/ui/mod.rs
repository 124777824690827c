//! User interface module - GTK-based
//!
//! This module contains the GTK implementation of the UI.

pub mod design_view;
