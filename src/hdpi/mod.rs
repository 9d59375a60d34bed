// src/hdpi/mod.rs
//! Logical <-> backbuffer coordinate conversion.
//!
//! - HdpiMode: whether viewport/scissor arguments get converted
//! - HdpiConverter: owns the mode, wraps the native viewport/scissor primitives
//! - Axis functions: pure per-axis conversions, truncating toward zero
//!
//! The conversions are lossy. `to_logical_x(gfx, to_back_buffer_x(gfx, v))` can
//! be off by one from `v` whenever the ratio is not a whole number.

pub mod converter;


pub use converter::{HdpiConverter, ModeGuard};

use crate::graphics::Graphics;
use serde::{Deserialize, Serialize};

/// Coordinate space callers hand to `gl_viewport` / `gl_scissor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HdpiMode {
    /// Arguments are logical coordinates and get scaled to the backbuffer.
    #[default]
    Logical,
    /// Arguments are already backbuffer pixels and pass through untouched.
    Pixels,
}

/// Rectangle as the native primitives take it: origin plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Extents are scaled with the same ratio as positions on their axis.
    pub fn to_back_buffer<G: Graphics + ?Sized>(self, gfx: &G) -> Rect {
        Rect {
            x: to_back_buffer_x(gfx, self.x),
            y: to_back_buffer_y(gfx, self.y),
            width: to_back_buffer_x(gfx, self.width),
            height: to_back_buffer_y(gfx, self.height),
        }
    }

    pub fn to_logical<G: Graphics + ?Sized>(self, gfx: &G) -> Rect {
        Rect {
            x: to_logical_x(gfx, self.x),
            y: to_logical_y(gfx, self.y),
            width: to_logical_x(gfx, self.width),
            height: to_logical_y(gfx, self.height),
        }
    }
}

/// `value * numerator / denominator`, truncated toward zero.
///
/// The product is exact in i64; the division is single precision. A zero
/// denominator is not checked: the cast saturates infinities and maps NaN to 0.
#[inline]
fn scale(value: i32, numerator: u32, denominator: u32) -> i32 {
    ((value as i64 * numerator as i64) as f32 / denominator as f32) as i32
}

/// Converts an x-coordinate in backbuffer pixels to logical coordinates.
pub fn to_logical_x<G: Graphics + ?Sized>(gfx: &G, back_buffer_x: i32) -> i32 {
    scale(back_buffer_x, gfx.width(), gfx.back_buffer_width())
}

/// Converts a y-coordinate in backbuffer pixels to logical coordinates.
pub fn to_logical_y<G: Graphics + ?Sized>(gfx: &G, back_buffer_y: i32) -> i32 {
    scale(back_buffer_y, gfx.height(), gfx.back_buffer_height())
}

/// Converts an x-coordinate in logical coordinates to backbuffer pixels.
pub fn to_back_buffer_x<G: Graphics + ?Sized>(gfx: &G, logical_x: i32) -> i32 {
    scale(logical_x, gfx.back_buffer_width(), gfx.width())
}

/// Converts a y-coordinate in logical coordinates to backbuffer pixels.
pub fn to_back_buffer_y<G: Graphics + ?Sized>(gfx: &G, logical_y: i32) -> i32 {
    scale(logical_y, gfx.back_buffer_height(), gfx.height())
}
