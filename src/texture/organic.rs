//! Natural materials: wood, stone and hide.

use crate::error::Result;
use crate::image::Color;
use crate::texture::{jitter, perturb, set_color, solid, Walk};

use cairo::{Context, ImageSurface, RadialGradient};
use fastrand::Rng;
use std::f64::consts::PI;

const WOOD: Color = Color::rgb8(0x8B, 0x73, 0x55);
const GRAIN_LINES: usize = 40;
const KNOTS: usize = 3;

pub(super) fn woodgrain(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let surface = solid(width, height, WOOD)?;
    let (w, h) = (width as f64, height as f64);
    let cr = Context::new(&surface)?;

    for i in 0..GRAIN_LINES {
        let y = i as f64 / GRAIN_LINES as f64 * h;
        let offset = (y * 0.1).sin() * 20.0;
        let waviness = rng.f64() * 10.0;
        set_color(&cr, Color::rgba8(101, 67, 33, jitter(rng, 0.3, 0.4)));
        cr.set_line_width(jitter(rng, 1.0, 2.0));
        cr.move_to(0.0, y);
        let mut x = 0.0;
        while x < w {
            cr.line_to(x, y + (x * 0.05 + offset).sin() * waviness);
            x += 10.0;
        }
        cr.stroke()?;
    }

    for _ in 0..KNOTS {
        let (x, y) = (rng.f64() * w, rng.f64() * h);
        let radius = jitter(rng, 15.0, 20.0);
        let knot = RadialGradient::new(x, y, 0.0, x, y, radius);
        knot.add_color_stop_rgba(0.0, 56.0 / 255.0, 37.0 / 255.0, 19.0 / 255.0, 0.8);
        knot.add_color_stop_rgba(0.5, 101.0 / 255.0, 67.0 / 255.0, 33.0 / 255.0, 0.5);
        knot.add_color_stop_rgba(1.0, 139.0 / 255.0, 115.0 / 255.0, 85.0 / 255.0, 0.0);
        cr.set_source(&knot)?;
        cr.new_sub_path();
        cr.arc(x, y, radius, 0.0, 2.0 * PI);
        cr.fill()?;
    }
    drop(cr);
    Ok(surface)
}

const CONCRETE: Color = Color::rgb8(0xA8, 0xA8, 0xA8);

pub(super) fn concrete(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let mut surface = solid(width, height, CONCRETE)?;
    perturb(&mut surface, rng, 40.0, [1.0, 1.0, 1.0], [0.0; 3])?;
    let (w, h) = (width as f64, height as f64);
    let cr = Context::new(&surface)?;

    for _ in 0..15 {
        set_color(&cr, Color::rgba8(80, 80, 80, jitter(rng, 0.3, 0.3)));
        cr.set_line_width(jitter(rng, 1.0, 1.0));
        let crack = Walk {
            x: rng.f64() * w,
            y: rng.f64() * h,
            length: jitter(rng, 50.0, 100.0),
            angle: rng.f64() * 2.0 * PI,
            step: 5.0,
            jitter: 0.5,
        };
        crack.trace(&cr, rng);
        cr.stroke()?;
    }
    drop(cr);
    Ok(surface)
}

const SAND: Color = Color::rgb8(0xDE, 0xB8, 0x87);

pub(super) fn sandstone(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let mut surface = solid(width, height, SAND)?;
    perturb(&mut surface, rng, 30.0, [1.0, 0.9, 0.8], [0.0; 3])?;
    let (w, h) = (width as f64, height as f64);
    let cr = Context::new(&surface)?;

    // stratification bands
    for _ in 0..20 {
        let y = rng.f64() * h;
        let band = jitter(rng, 5.0, 10.0);
        set_color(&cr, Color::rgba8(160, 130, 109, jitter(rng, 0.1, 0.2)));
        cr.rectangle(0.0, y, w, band);
        cr.fill()?;
    }
    drop(cr);
    Ok(surface)
}

const LEATHER: Color = Color::rgb8(0x8B, 0x45, 0x13);

pub(super) fn leather(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let mut surface = solid(width, height, LEATHER)?;
    perturb(&mut surface, rng, 25.0, [1.0, 0.8, 0.6], [0.0; 3])?;
    let (w, h) = (width as f64, height as f64);
    let cr = Context::new(&surface)?;

    for _ in 0..30 {
        set_color(&cr, Color::rgba8(70, 35, 10, jitter(rng, 0.2, 0.3)));
        cr.set_line_width(jitter(rng, 0.5, 1.5));
        let wrinkle = Walk {
            x: rng.f64() * w,
            y: rng.f64() * h,
            length: jitter(rng, 30.0, 80.0),
            angle: rng.f64() * 2.0 * PI,
            step: 3.0,
            jitter: 0.8,
        };
        wrinkle.trace(&cr, rng);
        cr.stroke()?;
    }
    drop(cr);
    Ok(surface)
}

const MARBLE: Color = Color::rgb8(0xF8, 0xF8, 0xF0);
const VEIN: (u8, u8, u8) = (169, 169, 169);

pub(super) fn marble(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let mut surface = solid(width, height, MARBLE)?;
    perturb(&mut surface, rng, 20.0, [1.0, 1.0, 1.0], [0.0, 0.0, -5.0])?;
    let (w, h) = (width as f64, height as f64);
    let cr = Context::new(&surface)?;
    let (r, g, b) = VEIN;

    for _ in 0..15 {
        let vein = Walk {
            x: rng.f64() * w,
            y: rng.f64() * h,
            length: jitter(rng, 100.0, 300.0),
            angle: (rng.f64() - 0.5) * PI,
            step: 5.0,
            jitter: 0.3,
        };
        set_color(&cr, Color::rgba8(r, g, b, jitter(rng, 0.2, 0.4)));
        cr.set_line_width(jitter(rng, 1.0, 3.0));
        vein.trace(&cr, rng);
        cr.stroke()?;

        if rng.f64() > 0.5 {
            let (x, y) = vein.midpoint();
            let branch = Walk {
                x,
                y,
                angle: vein.angle + (rng.f64() - 0.5) * PI / 2.0,
                length: jitter(rng, 50.0, 100.0),
                step: 5.0,
                jitter: 0.4,
            };
            set_color(&cr, Color::rgba8(r, g, b, jitter(rng, 0.1, 0.3)));
            cr.set_line_width(jitter(rng, 0.5, 1.5));
            branch.trace(&cr, rng);
            cr.stroke()?;
        }
    }
    drop(cr);
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Raster;

    #[test]
    fn concrete_grain_stays_near_base() {
        let mut rng = Rng::with_seed(3);
        let raster = Raster::from_surface(concrete(&mut rng, 32, 32).unwrap());
        let [r, g, b, a] = raster.pixel(0, 31).unwrap();
        assert_eq!(a, 255);
        // noise shifts all channels together, cracks are neutral gray
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn sandstone_keeps_warm_tint() {
        let mut rng = Rng::with_seed(11);
        let raster = Raster::from_surface(sandstone(&mut rng, 16, 16).unwrap());
        let [r, g, b, _] = raster.pixel(8, 8).unwrap();
        assert!(r > g && g > b);
    }
}
