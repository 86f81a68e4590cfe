// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use colors_saved::gui;
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

/// Four-quadrant swatch, drawn rather than shipped as an asset.
fn app_icon() -> IconData {
    const QUADS: [[u8; 4]; 4] = [
        [0xE5, 0x39, 0x35, 0xFF],
        [0x43, 0xA0, 0x47, 0xFF],
        [0x1E, 0x88, 0xE5, 0xFF],
        [0xFD, 0xD8, 0x35, 0xFF],
    ];
    let size = 32;
    let rgba = RgbaImage::from_fn(size, size, |x, y| {
        let q = (x >= size / 2) as usize + 2 * (y >= size / 2) as usize;
        Rgba(QUADS[q])
    });
    IconData { rgba: rgba.into_raw(), width: size, height: size }
}

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
