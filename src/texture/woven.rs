//! Regular patterns: print screens and fabrics.

use crate::error::Result;
use crate::image::Color;
use crate::texture::{jitter, perturb, set_color, solid};

use cairo::{Context, ImageSurface, LinearGradient};
use fastrand::Rng;
use std::f64::consts::PI;

const NEWSPRINT: Color = Color::rgb8(0xE8, 0xE8, 0xE8);
const DOT_SPACING: usize = 8;
const DOT_SIZE: f64 = 3.0;

pub(super) fn halftone(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let surface = solid(width, height, NEWSPRINT)?;
    let cr = Context::new(&surface)?;

    for y in (0..height as usize).step_by(DOT_SPACING) {
        for x in (0..width as usize).step_by(DOT_SPACING) {
            let (x, y) = (x as f64, y as f64);
            let size = DOT_SIZE + (x * 0.1).sin() * 0.5;
            let gray = jitter(rng, 180.0, 30.0) / 255.0;
            cr.set_source_rgb(gray, gray, gray);
            cr.new_sub_path();
            cr.arc(x, y, size / 2.0, 0.0, 2.0 * PI);
            cr.fill()?;
        }
    }
    drop(cr);
    Ok(surface)
}

const CANVAS: Color = Color::rgb8(0xF5, 0xF5, 0xDC);
const THREAD: f64 = 4.0;

pub(super) fn canvas(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let surface = solid(width, height, CANVAS)?;
    let cr = Context::new(&surface)?;
    let pitch = (THREAD * 2.0) as usize;

    for y in (0..height as usize).step_by(pitch) {
        for x in (0..width as usize).step_by(pitch) {
            let (x, y) = (x as f64, y as f64);
            set_color(&cr, Color::rgba8(220, 220, 200, jitter(rng, 0.5, 0.3)));
            cr.rectangle(x, y, THREAD * 2.0, THREAD);
            cr.fill()?;
            set_color(&cr, Color::rgba8(200, 200, 180, jitter(rng, 0.5, 0.3)));
            cr.rectangle(x, y, THREAD, THREAD * 2.0);
            cr.fill()?;
        }
    }
    drop(cr);
    Ok(surface)
}

const DENIM: Color = Color::rgb8(0x46, 0x82, 0xB4);
const WEAVE: i64 = 3;

pub(super) fn denim(rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let mut surface = solid(width, height, DENIM)?;
    let (w, h) = (width as i64, height as i64);
    {
        let cr = Context::new(&surface)?;
        let size = WEAVE as f64;
        // diagonal rows are sheared by `y`, so the loops overscan both axes
        for y in (-w..h + w).step_by((WEAVE * 2) as usize) {
            for x in (-h..w + h).step_by((WEAVE * 2) as usize) {
                let (x, y) = ((x + y) as f64, y as f64);
                set_color(&cr, Color::rgba8(100, 149, 237, jitter(rng, 0.3, 0.2)));
                cr.rectangle(x, y, size, size);
                cr.fill()?;
                set_color(&cr, Color::rgba8(25, 50, 100, jitter(rng, 0.2, 0.2)));
                cr.rectangle(x + size, y, size, size);
                cr.fill()?;
            }
        }
    }
    perturb(&mut surface, rng, 15.0, [1.0, 1.0, 1.0], [0.0; 3])?;
    Ok(surface)
}

const CARBON: Color = Color::rgb8(0x1A, 0x1A, 0x1A);
const CARBON_DARK: Color = Color::rgb8(0x0D, 0x0D, 0x0D);
const CARBON_LIGHT: Color = Color::rgb8(0x26, 0x26, 0x26);
const FIBER: f64 = 8.0;

fn sheen(x0: f64, y0: f64, x1: f64, y1: f64, peak: f64) -> LinearGradient {
    let gradient = LinearGradient::new(x0, y0, x1, y1);
    gradient.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, 0.0);
    gradient.add_color_stop_rgba(0.5, 1.0, 1.0, 1.0, peak);
    gradient.add_color_stop_rgba(1.0, 1.0, 1.0, 1.0, 0.0);
    gradient
}

pub(super) fn carbon(_rng: &mut Rng, width: u32, height: u32) -> Result<ImageSurface> {
    let surface = solid(width, height, CARBON)?;
    let cr = Context::new(&surface)?;
    let cell = (FIBER * 2.0) as usize;

    for y in (0..height as usize).step_by(cell) {
        for x in (0..width as usize).step_by(cell) {
            let (x, y) = (x as f64, y as f64);
            set_color(&cr, CARBON_DARK);
            cr.rectangle(x, y, FIBER * 2.0, FIBER);
            cr.fill()?;
            set_color(&cr, CARBON_LIGHT);
            cr.rectangle(x, y + FIBER, FIBER * 2.0, FIBER);
            cr.fill()?;

            cr.set_source(&sheen(x, y, x + FIBER * 2.0, y, 0.05))?;
            cr.rectangle(x, y, FIBER * 2.0, FIBER);
            cr.fill()?;
            cr.set_source(&sheen(x, y + FIBER, x, y + FIBER * 2.0, 0.08))?;
            cr.rectangle(x, y + FIBER, FIBER * 2.0, FIBER);
            cr.fill()?;
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
    fn carbon_bands_alternate() {
        let raster = Raster::from_surface(carbon(&mut Rng::with_seed(0), 16, 16).unwrap());
        let [dark, ..] = raster.pixel(0, 2).unwrap();
        let [light, ..] = raster.pixel(0, 10).unwrap();
        assert!(dark < light);
    }

    #[test]
    fn halftone_dots_are_darker_than_paper() {
        let raster = Raster::from_surface(halftone(&mut Rng::with_seed(5), 16, 16).unwrap());
        let [dot, ..] = raster.pixel(8, 8).unwrap();
        let [paper, ..] = raster.pixel(4, 4).unwrap();
        assert_eq!(paper, 0xE8);
        assert!(dot < paper);
    }
}
