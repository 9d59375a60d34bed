// src/lib.rs
//! HDPI-aware viewport and scissor configuration.
//!
//! On high-density displays the logical window size reported by the OS is
//! smaller than the backbuffer the GPU draws into. `HdpiConverter` takes
//! rectangles in logical coordinates and hands backbuffer pixels to the
//! graphics context's native viewport/scissor primitives.

pub mod config;
pub mod graphics;
pub mod hdpi;

pub use config::{Config, CONFIG};
pub use graphics::{GlCall, Graphics, HeadlessGraphics};
pub use hdpi::{
    to_back_buffer_x, to_back_buffer_y, to_logical_x, to_logical_y, HdpiConverter, HdpiMode,
    ModeGuard, Rect,
};
