use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::buffer::PixelBuffer;
use crate::consts::{ALPHA, BLUE, BYTES_PER_PIXEL, GREEN, RED};
use crate::error::{CorrectionError, Result};

/// Load any image the `image` crate can decode into a BGRA buffer.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let rgba = image::open(path)?.to_rgba8();
    from_rgba(&rgba)
}

/// Convert an RGBA image into a tightly packed BGRA buffer.
pub fn from_rgba(rgba: &RgbaImage) -> Result<PixelBuffer> {
    let (w, h) = rgba.dimensions();
    let mut data = Vec::with_capacity(w as usize * h as usize * BYTES_PER_PIXEL);
    for px in rgba.pixels() {
        let [r, g, b, a] = px.0;
        data.extend_from_slice(&[b, g, r, a]);
    }
    PixelBuffer::from_bgra(w as usize, h as usize, data)
}

/// Convert a BGRA buffer (any stride) into an RGBA image.
pub fn to_rgba(buffer: &PixelBuffer) -> Result<RgbaImage> {
    let (w, h) = buffer.dimensions();
    let mut pixels = Vec::with_capacity(w * h * BYTES_PER_PIXEL);
    for y in 0..h {
        for px in buffer.row(y).chunks_exact(BYTES_PER_PIXEL) {
            pixels.extend_from_slice(&[px[RED], px[GREEN], px[BLUE], px[ALPHA]]);
        }
    }
    RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or_else(|| {
        CorrectionError::InvalidBuffer(format!("cannot build a {w}x{h} RGBA image"))
    })
}

/// Save a buffer as 8-bit RGBA PNG.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    to_rgba(buffer)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a buffer as 8-bit RGBA TIFF.
pub fn save_tiff(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    to_rgba(buffer)?.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a buffer, choosing the format from the file extension (PNG otherwise).
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("tiff" | "tif") => save_tiff(buffer, path),
        _ => save_png(buffer, path),
    }
}
