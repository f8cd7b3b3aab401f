use crate::error::Result;
use crate::image::Color;
use crate::texture::{jitter, solid};

use cairo::{Context, ImageSurface, LinearGradient};
use fastrand::Rng;

const STEEL: Color = Color::rgb8(0xC0, 0xC0, 0xC0);
const HIGHLIGHTS: usize = 20;

pub(super) fn brushed(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let surface = solid(width, height, STEEL)?;
    let (w, h) = (width as f64, height as f64);
    let cr = Context::new(&surface)?;

    // one brush stroke per row
    for y in 0..height {
        let y = y as f64;
        let brightness = (180.0 + (rng.f64() - 0.5) * 50.0) / 255.0;
        let opacity = jitter(rng, 0.3, 0.4);
        cr.set_source_rgba(brightness, brightness, brightness, opacity);
        cr.set_line_width(jitter(rng, 1.0, 2.0));
        cr.move_to(0.0, y);
        let mut x = 0.0;
        while x < w {
            cr.line_to(x, y + (rng.f64() - 0.5) * 0.5);
            x += 10.0;
        }
        cr.stroke()?;
    }

    for _ in 0..HIGHLIGHTS {
        let y = rng.f64() * h;
        let band = jitter(rng, 50.0, 150.0);
        let gradient = LinearGradient::new(0.0, y - 5.0, 0.0, y + 5.0);
        gradient.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, 0.0);
        gradient.add_color_stop_rgba(0.5, 1.0, 1.0, 1.0, 0.3);
        gradient.add_color_stop_rgba(1.0, 1.0, 1.0, 1.0, 0.0);
        cr.set_source(&gradient)?;
        cr.rectangle(rng.f64() * (w - band), y - 5.0, band, 10.0);
        cr.fill()?;
    }
    drop(cr);
    Ok(surface)
}
