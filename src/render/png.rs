//! PNG output for finished portraits.
//!
//! Encodes canvases to PNG files, optionally downscaled to fit a maximum
//! dimension.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{MugshotError, Result};

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The composited portrait
/// * `path` - Output file path
/// * `max_size` - Optional bound on the longer side; the canvas is shrunk
///   (never enlarged) to fit, keeping its aspect ratio
pub fn write_png(canvas: &RgbaImage, path: &Path, max_size: Option<u32>) -> Result<()> {
    let resized;
    let image = match max_size {
        Some(max) => {
            resized = fit_within(canvas, max);
            &resized
        }
        None => canvas,
    };

    image.save(path).map_err(|e| MugshotError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Shrink a canvas so its longer side is at most `max` pixels.
///
/// Uses Lanczos filtering, which keeps the flat-shaded outlines smooth.
/// Canvases already within bounds are returned unchanged.
pub fn fit_within(canvas: &RgbaImage, max: u32) -> RgbaImage {
    let max = max.max(1);
    let (width, height) = canvas.dimensions();
    let longest = width.max(height);

    if longest <= max {
        return canvas.clone();
    }

    let scale = f64::from(max) / f64::from(longest);
    let new_width = ((f64::from(width) * scale).round() as u32).max(1);
    let new_height = ((f64::from(height) * scale).round() as u32).max(1);

    imageops::resize(canvas, new_width, new_height, FilterType::Lanczos3)
}
