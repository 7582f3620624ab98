//! Rendering module for mugshot.
//!
//! This module handles recolouring marker layers, compositing them onto a
//! canvas in draw order, and encoding the result.

mod compose;
mod png;
mod recolour;

pub use compose::{blit, BlitMode, Compositor, DrawOp};
pub use png::{fit_within, write_png};
pub use recolour::{recolour, Marker, Tint};
