//! GTK user interface for JewelKit.

pub mod gtk_app;
pub mod ui;
