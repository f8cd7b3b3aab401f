//! Image backend implementations.

mod color;
mod loader;
mod map;

use crate::error::{Error, Result};
pub use crate::image::color::Color;
pub use crate::image::loader::ImageLoader;
pub use crate::image::map::ImageMap;

use cairo::{Format, ImageSurface};
use libvips::{ops, VipsApp, VipsImage};
use std::fmt;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A decoded bitmap, stored as a cairo ARGB32 surface.
#[derive(Clone)]
pub struct Raster(ImageSurface);

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
        Ok(Self(surface))
    }

    pub fn from_surface(surface: ImageSurface) -> Self {
        Self(surface)
    }

    pub fn from_png(bytes: &[u8]) -> Result<Self> {
        let surface = ImageSurface::create_from_png(&mut Cursor::new(bytes))
            .map_err(|e| Error::open_image("<png buffer>", e))?;
        if surface.format() == Format::ARgb32 {
            return Ok(Self(surface));
        }
        let argb = ImageSurface::create(Format::ARgb32, surface.width(), surface.height())?;
        {
            let cr = cairo::Context::new(&argb)?;
            cr.set_source_surface(&surface, 0.0, 0.0)?;
            cr.paint()?;
        }
        Ok(Self(argb))
    }

    pub fn width(&self) -> u32 {
        self.0.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.0.height() as u32
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.0
    }

    pub fn into_surface(self) -> ImageSurface {
        self.0
    }

    /// Reads one pixel as unpremultiplied `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.0.flush();
        let stride = self.0.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut px = None;
        self.0
            .with_data(|data| {
                let bytes = [
                    data[offset],
                    data[offset + 1],
                    data[offset + 2],
                    data[offset + 3],
                ];
                px = Some(unpremultiply(u32::from_ne_bytes(bytes)));
            })
            .ok()?;
        px
    }

    pub fn is_opaque(&self) -> bool {
        self.0.flush();
        let (w, h) = (self.width() as usize, self.height() as usize);
        let stride = self.0.stride() as usize;
        let mut opaque = false;
        let checked = self.0.with_data(|data| {
            opaque = (0..h).all(|y| {
                data[y * stride..y * stride + w * 4]
                    .chunks_exact(4)
                    .all(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) >> 24 == 0xFF)
            });
        });
        checked.is_ok() && opaque
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.0
            .write_to_png(&mut buffer)
            .map_err(|e| Error::write_image("<png buffer>", e))?;
        Ok(buffer)
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|e| Error::write_image(path, e))?;
        self.0
            .write_to_png(&mut file)
            .map_err(|e| Error::write_image(path, e))
    }
}

fn unpremultiply(px: u32) -> [u8; 4] {
    let a = (px >> 24) & 0xFF;
    let channel = |shift: u32| {
        let c = (px >> shift) & 0xFF;
        match a {
            0 => 0,
            255 => c as u8,
            _ => ((c * 255 + a / 2) / a).min(255) as u8,
        }
    };
    [channel(16), channel(8), channel(0), a as u8]
}

/// Decodes and encodes images that cairo cannot handle on its own.
pub struct ImgBackend {
    vips_app: VipsApp,
}

impl ImgBackend {
    pub fn new() -> Result<Self> {
        Ok(Self {
            vips_app: VipsApp::default("cardforge").map_err(|e| Error::VipsError(e.to_string()))?,
        })
    }

    pub fn err(&self, e: libvips::error::Error) -> Error {
        let buffer = self.vips_app.error_buffer().unwrap_or_default();
        Error::VipsError(format!("{e}\n{buffer}"))
    }

    fn reinterpret(&self, img: &VipsImage) -> Result<VipsImage> {
        let img = ops::cast(img, ops::BandFormat::Uchar).map_err(|e| self.err(e))?;
        let img = ops::colourspace(&img, ops::Interpretation::Srgb).map_err(|e| self.err(e))?;
        if img.get_bands() == 3 {
            ops::bandjoin_const(&img, &mut [255.0]).map_err(|e| self.err(e))
        } else {
            Ok(img)
        }
    }

    fn vips_to_raster(&self, img: &VipsImage) -> Result<Raster> {
        let img = self.reinterpret(img)?;
        let buffer = ops::pngsave_buffer(&img).map_err(|e| self.err(e))?;
        Raster::from_png(&buffer)
    }

    fn raster_to_vips(&self, raster: &Raster) -> Result<VipsImage> {
        let buffer = raster.to_png()?;
        VipsImage::new_from_buffer(&buffer, "").map_err(|e| self.err(e))
    }

    /// Opens any image file libvips can read.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Raster> {
        let path = path.as_ref();
        let fp = path.to_str().ok_or_else(|| Error::open_image(path, "path is not UTF-8"))?;
        let img = VipsImage::new_from_file(fp).map_err(|e| Error::open_image(path, self.err(e)))?;
        self.vips_to_raster(&img)
    }

    /// Decodes an in-memory image. PNG data skips libvips entirely.
    pub fn decode(&self, bytes: &[u8]) -> Result<Raster> {
        if bytes.starts_with(&PNG_MAGIC) {
            return Raster::from_png(bytes);
        }
        let img = VipsImage::new_from_buffer(bytes, "").map_err(|e| self.err(e))?;
        self.vips_to_raster(&img)
    }

    pub fn write_jpeg(&self, raster: &Raster, path: impl AsRef<Path>, quality: u8) -> Result<()> {
        let path = path.as_ref();
        let fp = path.to_str().ok_or_else(|| Error::write_image(path, "path is not UTF-8"))?;
        let img = self.raster_to_vips(raster)?;
        let img = ops::flatten(&img).map_err(|e| self.err(e))?;
        ops::jpegsave_with_opts(
            &img,
            fp,
            &ops::JpegsaveOptions {
                q: quality.clamp(1, 100) as i32,
                ..Default::default()
            },
        )
        .map_err(|e| Error::write_image(path, self.err(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(w: u32, h: u32, rgba: (f64, f64, f64, f64)) -> Raster {
        let raster = Raster::new(w, h).unwrap();
        {
            let cr = cairo::Context::new(raster.surface()).unwrap();
            cr.set_source_rgba(rgba.0, rgba.1, rgba.2, rgba.3);
            cr.paint().unwrap();
        }
        raster
    }

    #[test]
    fn reads_pixels_unpremultiplied() {
        let raster = filled(4, 3, (1.0, 0.0, 0.0, 1.0));
        assert_eq!(raster.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(4, 0), None);
        assert!(raster.is_opaque());

        let raster = filled(2, 2, (0.0, 0.0, 1.0, 0.5));
        let [r, g, b, a] = raster.pixel(1, 1).unwrap();
        assert_eq!((r, g), (0, 0));
        assert!(b >= 250);
        assert!((127..=128).contains(&a));
        assert!(!raster.is_opaque());
    }

    #[test]
    fn png_roundtrip_keeps_size() {
        let raster = filled(7, 5, (0.2, 0.4, 0.6, 1.0));
        let bytes = raster.to_png().unwrap();
        assert!(bytes.starts_with(&PNG_MAGIC));
        let decoded = Raster::from_png(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (7, 5));
        assert_eq!(decoded.pixel(3, 3), raster.pixel(3, 3));
    }

    #[test]
    fn rejects_garbage_png() {
        assert!(matches!(
            Raster::from_png(b"not a png"),
            Err(Error::FailedOpenImage(..))
        ));
    }
}
