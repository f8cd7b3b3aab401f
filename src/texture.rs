//! Procedural texture generation.
//!
//! Every texture starts from an opaque base color and layers noise, strokes and
//! fills on top of it, so the output is always fully opaque and can be tiled
//! as a repeating fill pattern.

mod cache;
mod metal;
mod organic;
mod woven;

pub use crate::texture::cache::{TextureCache, TextureSource};

use crate::error::{Error, Result};
use crate::image::{Color, Raster};

use cairo::{Context, Format, ImageSurface};
use fastrand::Rng;
use std::fmt;
use std::str::FromStr;

/// Default side of a generated texture, in pixels.
pub const DEFAULT_SIZE: u32 = 512;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Woodgrain,
    Halftone,
    Concrete,
    Sandstone,
    Canvas,
    Leather,
    Denim,
    Marble,
    Carbon,
    BrushedMetal,
}

impl TextureKind {
    pub const ALL: [TextureKind; 10] = [
        Self::Woodgrain,
        Self::Halftone,
        Self::Concrete,
        Self::Sandstone,
        Self::Canvas,
        Self::Leather,
        Self::Denim,
        Self::Marble,
        Self::Carbon,
        Self::BrushedMetal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Woodgrain => "woodgrain",
            Self::Halftone => "halftone",
            Self::Concrete => "concrete",
            Self::Sandstone => "sandstone",
            Self::Canvas => "canvas",
            Self::Leather => "leather",
            Self::Denim => "denim",
            Self::Marble => "marble",
            Self::Carbon => "carbon",
            Self::BrushedMetal => "brushedmetal",
        }
    }
}

impl FromStr for TextureKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "woodgrain" => Ok(Self::Woodgrain),
            "halftone" => Ok(Self::Halftone),
            "concrete" => Ok(Self::Concrete),
            "sandstone" | "sand" => Ok(Self::Sandstone),
            "canvas" => Ok(Self::Canvas),
            "leather" => Ok(Self::Leather),
            "denim" => Ok(Self::Denim),
            "marble" => Ok(Self::Marble),
            "carbon" => Ok(Self::Carbon),
            "brushedmetal" => Ok(Self::BrushedMetal),
            _ => Err(Error::UnknownTexture(s.to_string())),
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can synthesize texture bitmaps.
pub trait Generate {
    fn generate(&self, kind: TextureKind, width: u32, height: u32) -> Result<Raster>;
}

/// The built-in procedural generator.
///
/// Unseeded generators draw from a fresh random source on every call. With a
/// seed, the same `(kind, width, height)` always produces the same pixels.
#[derive(Debug, Copy, Clone, Default)]
pub struct Generator {
    pub seed: Option<u64>,
}

impl Generator {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Generate for Generator {
    fn generate(&self, kind: TextureKind, width: u32, height: u32) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidTextureSize(width, height));
        }
        let mut rng = match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        tracing::debug!(texture = %kind, width, height, "generating texture");
        let surface = match kind {
            TextureKind::Woodgrain => organic::woodgrain(&mut rng, width, height)?,
            TextureKind::Halftone => woven::halftone(&mut rng, width, height)?,
            TextureKind::Concrete => organic::concrete(&mut rng, width, height)?,
            TextureKind::Sandstone => organic::sandstone(&mut rng, width, height)?,
            TextureKind::Canvas => woven::canvas(&mut rng, width, height)?,
            TextureKind::Leather => organic::leather(&mut rng, width, height)?,
            TextureKind::Denim => woven::denim(&mut rng, width, height)?,
            TextureKind::Marble => organic::marble(&mut rng, width, height)?,
            TextureKind::Carbon => woven::carbon(&mut rng, width, height)?,
            TextureKind::BrushedMetal => metal::brushed(&mut rng, width, height)?,
        };
        Ok(Raster::from_surface(surface))
    }
}

/// Generates a texture by name with an unseeded generator.
pub fn generate(name: &str, width: u32, height: u32) -> Result<Raster> {
    let kind = name.parse::<TextureKind>()?;
    Generator::new().generate(kind, width, height)
}

fn solid(width: u32, height: u32, base: Color) -> Result<ImageSurface> {
    let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
    {
        let cr = Context::new(&surface)?;
        let (r, g, b) = base.rgb();
        cr.set_source_rgb(r, g, b);
        cr.paint()?;
    }
    Ok(surface)
}

fn set_color(cr: &Context, color: Color) {
    let (r, g, b, a) = color.rgba();
    cr.set_source_rgba(r, g, b, a);
}

/// Random value in `[lo, lo + span)`.
fn jitter(rng: &mut Rng, lo: f64, span: f64) -> f64 {
    lo + rng.f64() * span
}

/// Per-pixel additive grain. The surface must be opaque.
///
/// Each pixel draws one delta in `[-amount/2, amount/2)`, scaled per channel
/// by `weights` and offset by `bias`.
fn perturb(
    surface: &mut ImageSurface,
    rng: &mut Rng,
    amount: f64,
    weights: [f64; 3],
    bias: [f64; 3],
) -> Result<()> {
    let stride = surface.stride() as usize;
    let (w, h) = (surface.width() as usize, surface.height() as usize);
    let mut data = surface.data()?;
    for row in data.chunks_exact_mut(stride).take(h) {
        for px in row[..w * 4].chunks_exact_mut(4) {
            let v = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
            let delta = (rng.f64() - 0.5) * amount;
            let shift = |c: u32, i: usize| {
                (c as f64 + delta * weights[i] + bias[i])
                    .round()
                    .clamp(0.0, 255.0) as u32
            };
            let r = shift((v >> 16) & 0xFF, 0);
            let g = shift((v >> 8) & 0xFF, 1);
            let b = shift(v & 0xFF, 2);
            let v = 0xFF00_0000 | (r << 16) | (g << 8) | b;
            px.copy_from_slice(&v.to_ne_bytes());
        }
    }
    Ok(())
}

/// A jagged polyline heading roughly along `angle`.
#[derive(Debug, Copy, Clone)]
struct Walk {
    x: f64,
    y: f64,
    angle: f64,
    length: f64,
    step: f64,
    jitter: f64,
}

impl Walk {
    /// Traces the walk into the current path. Each segment deviates from the
    /// heading by up to `jitter / 2` radians.
    fn trace(&self, cr: &Context, rng: &mut Rng) {
        let (mut x, mut y) = (self.x, self.y);
        cr.move_to(x, y);
        let mut travelled = 0.0;
        while travelled < self.length {
            let angle = self.angle + (rng.f64() - 0.5) * self.jitter;
            x += angle.cos() * self.step;
            y += angle.sin() * self.step;
            cr.line_to(x, y);
            travelled += self.step;
        }
    }

    /// The point halfway along the straight heading.
    fn midpoint(&self) -> (f64, f64) {
        let half = self.length / 2.0;
        (self.x + self.angle.cos() * half, self.y + self.angle.sin() * half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("brushedMetal".parse::<TextureKind>().unwrap(), TextureKind::BrushedMetal);
        assert_eq!("WOODGRAIN".parse::<TextureKind>().unwrap(), TextureKind::Woodgrain);
        assert_eq!("sand".parse::<TextureKind>().unwrap(), TextureKind::Sandstone);
        for kind in TextureKind::ALL {
            assert_eq!(kind.name().parse::<TextureKind>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["plaid", "", "wood grain"] {
            match name.parse::<TextureKind>() {
                Err(Error::UnknownTexture(n)) => assert_eq!(n, name),
                other => panic!("expected UnknownTexture, got {other:?}"),
            }
        }
        for (w, h) in [(1, 1), (64, 32), (512, 512)] {
            assert!(matches!(generate("plaid", w, h), Err(Error::UnknownTexture(_))));
        }
    }

    #[test]
    fn every_texture_is_opaque_and_sized() {
        for kind in TextureKind::ALL {
            for (w, h) in [(1, 1), (17, 9), (40, 64)] {
                let raster = Generator::new().generate(kind, w, h).unwrap();
                assert_eq!((raster.width(), raster.height()), (w, h), "{kind}");
                assert!(raster.is_opaque(), "{kind} {w}x{h} has transparent pixels");
            }
        }
    }

    #[test]
    fn rejects_empty_sizes() {
        assert!(matches!(
            generate("marble", 0, 10),
            Err(Error::InvalidTextureSize(0, 10))
        ));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let gen = Generator::seeded(42);
        for kind in TextureKind::ALL {
            let a = gen.generate(kind, 24, 24).unwrap();
            let b = gen.generate(kind, 24, 24).unwrap();
            for (x, y) in [(0, 0), (5, 7), (23, 23), (12, 3)] {
                assert_eq!(a.pixel(x, y), b.pixel(x, y), "{kind} at {x},{y}");
            }
        }
    }

    #[test]
    fn perturb_stays_in_range() {
        let mut surface = solid(8, 8, Color::rgb8(250, 5, 128)).unwrap();
        let mut rng = Rng::with_seed(7);
        perturb(&mut surface, &mut rng, 40.0, [1.0; 3], [0.0, 0.0, -5.0]).unwrap();
        let raster = Raster::from_surface(surface);
        assert!(raster.is_opaque());
        let [r, g, b, _] = raster.pixel(3, 3).unwrap();
        assert!(r >= 230);
        assert!(g <= 25);
        assert!((103..=148).contains(&b));
    }
}
