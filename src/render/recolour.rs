//! Marker-based recolouring of layers.
//!
//! Tintable layers are authored with "recolour me" channel values. Two
//! conventions exist: garment and hair sheets mark tint areas with fully
//! saturated channels (255), while body-shape sheets treat any non-zero
//! channel as skin.

use image::RgbaImage;

use crate::types::{Colour, Layer};

/// Which channel values a tint replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Channel value equals 255.
    Saturated,
    /// Channel value is greater than zero.
    NonZero,
}

impl Marker {
    /// Check whether a channel value is a marker.
    pub fn matches(self, value: u8) -> bool {
        match self {
            Marker::Saturated => value == u8::MAX,
            Marker::NonZero => value > 0,
        }
    }
}

/// A target colour together with the marker convention of its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub colour: Colour,
    pub marker: Marker,
}

impl Tint {
    pub fn new(colour: Colour, marker: Marker) -> Self {
        Self { colour, marker }
    }
}

/// Return a recoloured copy of `layer`.
///
/// The marker test runs per channel: each of R, G and B that matches takes
/// the matching channel of `colour`. Alpha and non-matching channels are
/// copied unchanged, and the source layer is never modified.
pub fn recolour(layer: &Layer, tint: Tint) -> RgbaImage {
    let mut image = layer.image().clone();
    let target = tint.colour.to_rgb();

    for pixel in image.pixels_mut() {
        for (channel, value) in pixel.0[..3].iter_mut().zip(target) {
            if tint.marker.matches(*channel) {
                *channel = value;
            }
        }
    }

    image
}
