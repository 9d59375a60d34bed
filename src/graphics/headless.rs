//! Headless graphics context implementation.

use crate::graphics::Graphics;
use anyhow::{anyhow, Result};
use log::{info, trace};

/// A native primitive invocation recorded by `HeadlessGraphics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlCall {
    Viewport {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Scissor {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Graphics context with no window behind it.
///
/// Records every primitive call so the arguments that would have reached the
/// GPU can be inspected afterwards.
pub struct HeadlessGraphics {
    width: u32,
    height: u32,
    back_buffer_width: u32,
    back_buffer_height: u32,
    calls: Vec<GlCall>,
    fail_next: Option<String>,
}

impl HeadlessGraphics {
    pub fn new(width: u32, height: u32, back_buffer_width: u32, back_buffer_height: u32) -> Self {
        info!(
            "HeadlessGraphics::new() - logical {}x{}, backbuffer {}x{}",
            width, height, back_buffer_width, back_buffer_height
        );
        Self {
            width,
            height,
            back_buffer_width,
            back_buffer_height,
            calls: Vec::new(),
            fail_next: None,
        }
    }

    /// Logical and backbuffer sizes are identical (non-HDPI display).
    pub fn uniform(width: u32, height: u32) -> Self {
        Self::new(width, height, width, height)
    }

    /// Simulate a window resize or a move to a display with another density.
    pub fn resize(&mut self, width: u32, height: u32, back_buffer_width: u32, back_buffer_height: u32) {
        self.width = width;
        self.height = height;
        self.back_buffer_width = back_buffer_width;
        self.back_buffer_height = back_buffer_height;
    }

    /// Make the next primitive call fail with `message`.
    pub fn fail_next_call(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<GlCall> {
        self.calls.last().copied()
    }

    fn record(&mut self, call: GlCall) -> Result<()> {
        if let Some(message) = self.fail_next.take() {
            return Err(anyhow!(message));
        }
        trace!("HeadlessGraphics: {:?}", call);
        self.calls.push(call);
        Ok(())
    }
}

impl Graphics for HeadlessGraphics {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn back_buffer_width(&self) -> u32 {
        self.back_buffer_width
    }

    fn back_buffer_height(&self) -> u32 {
        self.back_buffer_height
    }

    fn gl_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.record(GlCall::Viewport {
            x,
            y,
            width,
            height,
        })
    }

    fn gl_scissor(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.record(GlCall::Scissor {
            x,
            y,
            width,
            height,
        })
    }
}
