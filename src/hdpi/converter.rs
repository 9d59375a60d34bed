// src/hdpi/converter.rs
//! HdpiConverter - mode-aware wrapper around the native viewport/scissor primitives.

use crate::config::Config;
use crate::graphics::Graphics;
use crate::hdpi::{HdpiMode, Rect};
use anyhow::Result;
use log::{debug, trace};
use std::ops::{Deref, DerefMut};

/// Converts viewport and scissor rectangles before they reach the graphics context.
///
/// Holds the active `HdpiMode`. Owned by whoever drives rendering; there is no
/// process-wide mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HdpiConverter {
    mode: HdpiMode,
}

impl HdpiConverter {
    /// A converter in `Logical` mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// A converter starting in the configured mode.
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.hdpi.mode,
        }
    }

    pub fn mode(&self) -> HdpiMode {
        self.mode
    }

    /// Overwrites the mode. Takes effect on the next viewport/scissor call.
    ///
    /// Prefer `with_mode` when the override should only last for a scope, e.g.
    /// while drawing into an off-screen framebuffer at native resolution.
    pub fn set_mode(&mut self, mode: HdpiMode) {
        if self.mode != mode {
            debug!("HdpiConverter: mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Switches to `mode` until the returned guard is dropped.
    pub fn with_mode(&mut self, mode: HdpiMode) -> ModeGuard<'_> {
        let previous = self.mode;
        self.set_mode(mode);
        ModeGuard {
            converter: self,
            previous,
        }
    }

    /// True when arguments must be scaled: `Logical` mode on a context whose
    /// logical and backbuffer sizes differ on either axis.
    ///
    /// Equal sizes skip conversion entirely, so non-HDPI displays never see
    /// float rounding.
    pub fn needs_conversion<G: Graphics + ?Sized>(&self, gfx: &G) -> bool {
        self.mode == HdpiMode::Logical
            && (gfx.width() != gfx.back_buffer_width()
                || gfx.height() != gfx.back_buffer_height())
    }

    /// The rectangle the native primitive would receive for `rect`.
    pub fn to_back_buffer_rect<G: Graphics + ?Sized>(&self, gfx: &G, rect: Rect) -> Rect {
        if self.needs_conversion(gfx) {
            let converted = rect.to_back_buffer(gfx);
            trace!("HdpiConverter: {:?} -> {:?}", rect, converted);
            converted
        } else {
            rect
        }
    }

    /// Calls `Graphics::gl_scissor` with arguments converted per the current mode.
    pub fn gl_scissor<G: Graphics + ?Sized>(
        &self,
        gfx: &mut G,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<()> {
        let r = self.to_back_buffer_rect(&*gfx, Rect::new(x, y, width, height));
        gfx.gl_scissor(r.x, r.y, r.width, r.height)
    }

    /// Calls `Graphics::gl_viewport` with arguments converted per the current mode.
    pub fn gl_viewport<G: Graphics + ?Sized>(
        &self,
        gfx: &mut G,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<()> {
        let r = self.to_back_buffer_rect(&*gfx, Rect::new(x, y, width, height));
        gfx.gl_viewport(r.x, r.y, r.width, r.height)
    }
}

/// Restores the converter's previous mode when dropped.
///
/// Dereferences to the converter, so calls can go through the guard.
pub struct ModeGuard<'a> {
    converter: &'a mut HdpiConverter,
    previous: HdpiMode,
}

impl ModeGuard<'_> {
    /// Mode that will be restored on drop.
    pub fn previous(&self) -> HdpiMode {
        self.previous
    }
}

impl Deref for ModeGuard<'_> {
    type Target = HdpiConverter;

    fn deref(&self) -> &HdpiConverter {
        self.converter
    }
}

impl DerefMut for ModeGuard<'_> {
    fn deref_mut(&mut self) -> &mut HdpiConverter {
        self.converter
    }
}

impl Drop for ModeGuard<'_> {
    fn drop(&mut self) {
        self.converter.set_mode(self.previous);
    }
}
