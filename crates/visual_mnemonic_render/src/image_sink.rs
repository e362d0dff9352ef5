//! Conversion to `image` buffers and PNG export.
use std::path::Path;

use anyhow::Context;
use image::RgbImage;
use tracing::info;
use visual_mnemonic::prelude::PixelBuffer;

/// Copies a pixel buffer into an [`RgbImage`] of the same size.
pub fn to_rgb_image(pixels: &PixelBuffer) -> anyhow::Result<RgbImage> {
    RgbImage::from_raw(pixels.width(), pixels.height(), pixels.to_rgb_bytes())
        .context("pixel buffer does not match its canvas size")
}

/// Writes a pixel buffer as PNG.
pub fn save_png(pixels: &PixelBuffer, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let img = to_rgb_image(pixels)?;
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "Wrote {}x{} mnemonic to {}.",
        pixels.width(),
        pixels.height(),
        path.display()
    );
    Ok(())
}
