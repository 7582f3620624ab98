//! Raster layers.

use image::{Rgba, RgbaImage};

/// One pre-rendered, canvas-sized RGBA fragment.
///
/// Layers are read-only once loaded. Anything that needs different pixels
/// (recolouring) works on a copy, so a single catalog can be shared by any
/// number of generation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Name used in diagnostics (usually the source file stem).
    pub name: String,

    image: RgbaImage,
}

impl Layer {
    /// Wrap a decoded image.
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// A layer where every pixel has the same RGBA value.
    pub fn filled(name: impl Into<String>, width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(name, RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    /// A layer built from a per-pixel function.
    pub fn from_fn(
        name: impl Into<String>,
        width: u32,
        height: u32,
        f: impl FnMut(u32, u32) -> Rgba<u8>,
    ) -> Self {
        Self::new(name, RgbaImage::from_fn(width, height, f))
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Borrow the underlying pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Check whether any pixel of this layer is visible.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p.0[3] == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_layer() {
        let layer = Layer::filled("body", 3, 2, [1, 2, 3, 255]);
        assert_eq!(layer.size(), (3, 2));
        assert_eq!(layer.get(2, 1), Some([1, 2, 3, 255]));
        assert_eq!(layer.get(3, 0), None);
        assert!(!layer.is_blank());
    }

    #[test]
    fn test_from_fn_layer() {
        let layer = Layer::from_fn("diag", 2, 2, |x, y| {
            if x == y {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        assert_eq!(layer.get(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(layer.get(1, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_blank_layer() {
        assert!(Layer::filled("empty", 2, 2, [255, 255, 255, 0]).is_blank());
    }
}
