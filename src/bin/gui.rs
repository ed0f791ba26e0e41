// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use page_search::{config::options::AppOptions, gui};

fn main() {
    let options = match AppOptions::from_env() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(2);
        }
    };

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Page Search")
            .with_inner_size([760.0, 640.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
