#![forbid(unsafe_code)]
//! Sinks for `visual_mnemonic` pixel buffers: PNG images and 24-bit ANSI text art.

mod ascii;
mod image_sink;

use visual_mnemonic::prelude::{generate, Canvas, Seed};

pub use ascii::AsciiRenderer;
pub use image_sink::{save_png, to_rgb_image};

/// Installs a `fmt` subscriber honoring `RUST_LOG` (default `info`). Safe to call twice.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Generates the mnemonic for `seed` as an RGB image.
pub fn mnemonic_image(canvas: Canvas, seed: impl Into<Seed>) -> anyhow::Result<image::RgbImage> {
    let pixels = generate(canvas, seed)?;
    to_rgb_image(&pixels)
}

/// Generates the mnemonic for `seed` and renders it as terminal text.
pub fn mnemonic_ascii(
    canvas: Canvas,
    seed: impl Into<Seed>,
    renderer: &AsciiRenderer,
) -> anyhow::Result<String> {
    let pixels = generate(canvas, seed)?;
    renderer.render(&pixels)
}
