// SPDX-License-Identifier: GPL-3.0-or-later

// A tiny user font that draws every glyph as a stroked box, rendered to a
// PNG. The wrapper handle goes out of scope before the text is drawn; the
// engine keeps the callbacks alive through the native face.

use anyhow::Result;
use vellum::{BaseSurface, Context, Format, ImageSurface, UserFontFace};

const WIDTH: i32 = 400;
const HEIGHT: i32 = 200;
const FONT_SIZE: f64 = 64.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let surface = ImageSurface::create(Format::ARgb32, WIDTH, HEIGHT)?;
    let cr = Context::create(&*surface)?;

    cr.set_source_rgb(1.0, 1.0, 1.0)?;
    cr.paint()?;

    cr.move_to(50.0, (HEIGHT as f64 + FONT_SIZE) / 2.0)?;
    cr.set_source_rgb(0.8, 0.2, 0.2)?;

    {
        let font = UserFontFace::create()?;
        font.set_render_glyph_func(|_font, glyph, cr, extents| {
            println!("rendering glyph {glyph}");
            cr.set_line_width(0.05)?;
            cr.rectangle(0.0, -0.9, 0.8, 0.9)?;
            cr.stroke()?;
            extents.x_advance = 1.0;
            Ok(())
        })?;
        cr.set_font_face(&*font)?;
    }

    cr.set_font_size(FONT_SIZE)?;
    cr.show_text("vellum")?;

    surface.write_to_png("user-font.png")?;
    println!("wrote user-font.png");
    Ok(())
}
