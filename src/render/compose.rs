//! Compositor - stacks layers onto a canvas in draw order.
//!
//! Sources use hard-edged alpha masks, so blitting is a masked copy: any
//! pixel with non-zero alpha replaces the canvas pixel outright.

use image::RgbaImage;

use crate::error::{MugshotError, Result};
use crate::types::Layer;

use super::recolour::{recolour, Tint};

/// How a layer lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitMode {
    /// Copy visible pixels over the canvas.
    Over,
    /// The canvas becomes a copy of the layer, transparent pixels included.
    Replace,
}

/// One entry of a draw plan.
#[derive(Debug, Clone)]
pub struct DrawOp<'a> {
    /// Pipeline step, for logs and errors.
    pub step: &'static str,
    pub layer: &'a Layer,
    pub tint: Option<Tint>,
    pub mode: BlitMode,
}

impl<'a> DrawOp<'a> {
    /// Draw a layer as-is.
    pub fn plain(step: &'static str, layer: &'a Layer) -> Self {
        Self {
            step,
            layer,
            tint: None,
            mode: BlitMode::Over,
        }
    }

    /// Draw a recoloured copy of a layer.
    pub fn tinted(step: &'static str, layer: &'a Layer, tint: Tint) -> Self {
        Self {
            tint: Some(tint),
            ..Self::plain(step, layer)
        }
    }

    /// Switch this op to [`BlitMode::Replace`].
    pub fn replacing(mut self) -> Self {
        self.mode = BlitMode::Replace;
        self
    }
}

/// Composites draw plans onto fixed-size canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compositor {
    width: u32,
    height: u32,
}

impl Compositor {
    /// Create a compositor for a canvas size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Get the canvas dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check that every layer of a plan matches the canvas size.
    pub fn check(&self, ops: &[DrawOp<'_>]) -> Result<()> {
        for op in ops {
            let (w, h) = op.layer.size();
            if (w, h) != (self.width, self.height) {
                return Err(MugshotError::DimensionMismatch {
                    layer: format!("{}:{}", op.step, op.layer.name),
                    width: self.width,
                    height: self.height,
                    actual_width: w,
                    actual_height: h,
                });
            }
        }
        Ok(())
    }

    /// Composite a plan, back to front, onto a fresh transparent canvas.
    ///
    /// The whole plan is checked before anything is drawn, so a bad layer
    /// never yields a partially drawn canvas.
    pub fn compose(&self, ops: &[DrawOp<'_>]) -> Result<RgbaImage> {
        self.check(ops)?;

        let mut canvas = RgbaImage::new(self.width, self.height);

        for op in ops {
            tracing::trace!(step = op.step, layer = %op.layer.name, tinted = op.tint.is_some(), "blit");

            match (op.tint, op.mode) {
                (Some(tint), BlitMode::Over) => blit(&mut canvas, &recolour(op.layer, tint)),
                (Some(tint), BlitMode::Replace) => canvas = recolour(op.layer, tint),
                (None, BlitMode::Over) => blit(&mut canvas, op.layer.image()),
                (None, BlitMode::Replace) => canvas.clone_from(op.layer.image()),
            }
        }

        Ok(canvas)
    }
}

/// Copy source pixels onto destination, skipping transparent pixels.
///
/// Both buffers are expected to share dimensions.
pub fn blit(dest: &mut RgbaImage, source: &RgbaImage) {
    for (d, s) in dest.pixels_mut().zip(source.pixels()) {
        if s.0[3] > 0 {
            *d = *s;
        }
    }
}
