// src/main.rs

use hdpi_coords::{config::CONFIG, Graphics, HdpiConverter, HdpiMode, HeadlessGraphics, Rect};

use anyhow::Context;
use log::info;

// 2x HDPI window used for the walkthrough.
const LOGICAL_WIDTH: u32 = 400;
const LOGICAL_HEIGHT: u32 = 300;
const BACK_BUFFER_WIDTH: u32 = 800;
const BACK_BUFFER_HEIGHT: u32 = 600;

/// Drives a headless context through both conversion modes and logs what the
/// native primitives receive.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut gfx = HeadlessGraphics::new(
        LOGICAL_WIDTH,
        LOGICAL_HEIGHT,
        BACK_BUFFER_WIDTH,
        BACK_BUFFER_HEIGHT,
    );
    let mut converter = HdpiConverter::from_config(&CONFIG);
    info!("Converter starting in {:?} mode.", converter.mode());

    let area = Rect::new(10, 20, 100, 50);

    converter
        .gl_viewport(&mut gfx, area.x, area.y, area.width, area.height)
        .context("Failed to set viewport")?;
    info!("viewport {:?} -> {:?}", area, gfx.last_call());

    converter
        .gl_scissor(&mut gfx, area.x, area.y, area.width, area.height)
        .context("Failed to set scissor")?;
    info!("scissor {:?} -> {:?}", area, gfx.last_call());

    {
        // Off-screen targets are addressed in raw pixels.
        let pixels = converter.with_mode(HdpiMode::Pixels);
        pixels
            .gl_viewport(
                &mut gfx,
                0,
                0,
                BACK_BUFFER_WIDTH as i32,
                BACK_BUFFER_HEIGHT as i32,
            )
            .context("Failed to set off-screen viewport")?;
        info!("pixels-mode viewport -> {:?}", gfx.last_call());
    }
    info!("Converter back in {:?} mode.", converter.mode());

    let corner = Rect::new(
        0,
        0,
        gfx.back_buffer_width() as i32,
        gfx.back_buffer_height() as i32,
    );
    info!("backbuffer {:?} is logical {:?}", corner, corner.to_logical(&gfx));

    Ok(())
}
