// SPDX-License-Identifier: GPL-3.0-or-later

// Gradients, clipping and path construction on an image surface.

use anyhow::Result;
use vellum::{
    BaseGradient, BasePattern, BaseSurface, Context, Format, ImageSurface, LinearGradient,
    RadialGradient,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let surface = ImageSurface::create(Format::ARgb32, 320, 200)?;
    let cr = Context::create(&*surface)?;

    let sky = LinearGradient::create(0.0, 0.0, 0.0, 200.0)?;
    sky.add_color_stop_rgb(0.0, 0.1, 0.2, 0.5)?;
    sky.add_color_stop_rgb(1.0, 0.8, 0.85, 0.95)?;
    cr.set_source(&*sky)?;
    cr.paint()?;

    let sun = RadialGradient::create(240.0, 60.0, 5.0, 240.0, 60.0, 40.0)?;
    sun.add_color_stop_rgba(0.0, 1.0, 0.95, 0.6, 1.0)?;
    sun.add_color_stop_rgba(1.0, 1.0, 0.95, 0.6, 0.0)?;
    cr.set_source(&*sun)?;
    cr.arc(240.0, 60.0, 40.0, 0.0, std::f64::consts::TAU)?;
    cr.fill()?;

    cr.save()?;
    cr.rectangle(0.0, 140.0, 320.0, 60.0)?;
    cr.clip()?;
    cr.set_source_rgb(0.15, 0.35, 0.15)?;
    cr.paint()?;
    cr.restore()?;

    surface.write_to_png("gradient-card.png")?;
    println!("wrote gradient-card.png");
    Ok(())
}
