// src/graphics/mod.rs
//! Graphics trait - the narrow slice of a graphics context the converter consumes.
//!
//! The converter never owns a context. It borrows one per call, reads the four
//! dimensions, and invokes exactly one native primitive.
//!
//! ## Coordinate Spaces
//! - `width()` / `height()`: logical window size, in the same units callers use
//! - `back_buffer_width()` / `back_buffer_height()`: render-target size in pixels
//!
//! ## Threading Model
//! A context belongs to the rendering thread. Nothing here is `Send` or `Sync`
//! by requirement.

pub mod headless;

pub use headless::{GlCall, HeadlessGraphics};

use anyhow::Result;

/// Minimal graphics-context interface.
///
/// Implementations must never report a zero dimension. The converter divides by
/// these values without checking.
pub trait Graphics {
    /// Logical width of the window.
    fn width(&self) -> u32;

    /// Logical height of the window.
    fn height(&self) -> u32;

    /// Width of the backbuffer in pixels.
    fn back_buffer_width(&self) -> u32;

    /// Height of the backbuffer in pixels.
    fn back_buffer_height(&self) -> u32;

    /// Native viewport primitive. Arguments are in backbuffer pixels.
    ///
    /// Any error is returned to the caller of `HdpiConverter::gl_viewport` as-is.
    fn gl_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()>;

    /// Native scissor primitive. Arguments are in backbuffer pixels.
    fn gl_scissor(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()>;
}
