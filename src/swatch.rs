// src/swatch.rs
// Paint colors as a strip of square blocks, wrapping onto new bands.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::config::consts::{SWATCH_BLOCK, SWATCH_DIVIDER, SWATCH_WIDTH};
use crate::error::{Error, Result};
use crate::palette::Rgb;

const DIVIDER: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Blocks per band.
pub fn per_row() -> usize {
    (SWATCH_WIDTH / SWATCH_BLOCK) as usize
}

/// Image size for `count` blocks: full width, one band per started row.
pub fn dimensions(count: usize) -> (u32, u32) {
    let bands = count.div_ceil(per_row()).max(1) as u32;
    (SWATCH_WIDTH, bands * SWATCH_BLOCK)
}

pub fn render_swatch(colors: &[Rgb]) -> Result<RgbaImage> {
    if colors.is_empty() {
        return Err(Error::EmptyPalette);
    }
    let (w, h) = dimensions(colors.len());
    let mut img = RgbaImage::new(w, h);

    for (i, rgb) in colors.iter().enumerate() {
        let x0 = (i % per_row()) as u32 * SWATCH_BLOCK;
        let y0 = (i / per_row()) as u32 * SWATCH_BLOCK;
        let fill = Rgba(rgb.to_rgba(255));

        for y in y0..y0 + SWATCH_BLOCK {
            for x in x0..x0 + SWATCH_BLOCK {
                let on_divider = x >= x0 + SWATCH_BLOCK - SWATCH_DIVIDER;
                img.put_pixel(x, y, if on_divider { DIVIDER } else { fill });
            }
        }
    }
    Ok(img)
}

/// Render and write as PNG (format from the file extension).
pub fn save_swatch<P: AsRef<Path>>(path: P, colors: &[Rgb]) -> Result<()> {
    let img = render_swatch(colors)?;
    img.save(path.as_ref())?;
    logf!("swatch: {} color(s) -> {}", colors.len(), path.as_ref().display());
    Ok(())
}
