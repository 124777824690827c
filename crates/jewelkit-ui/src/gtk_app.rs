use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, CssProvider};

use crate::ui::design_view::DesignView;

pub fn main() {
    let app = Application::builder()
        .application_id("com.github.jewelkit.jewelkit")
        .build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(|app| {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("Fibonacci Jewelry Design")
            .default_width(540)
            .default_height(680)
            .resizable(false)
            .build();

        let view = DesignView::new();
        window.set_child(Some(&view.widget));

        window.present();
    });

    app.run();
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/style.css"));

    gtk4::style_context_add_provider_for_display(
        &gtk4::gdk::Display::default().expect("Could not connect to a display."),
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
