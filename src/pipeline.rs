//! Ties image loading, texture generation, rendering and export together.

use crate::data::{CardData, StatKey};
use crate::error::{Error, Result};
use crate::image::{ImageLoader, ImageMap, ImgBackend};
use crate::layer::{Layer, TextureRef};
use crate::render::{Face, Renderer};
use crate::scene::Scene;
use crate::template::Template;
use crate::texture::{Generate, Generator, TextureCache};

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// Picks the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ExportOptions {
    pub scale: f64,
    pub format: OutputFormat,
    pub quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            format: OutputFormat::Png,
            quality: 80,
        }
    }
}

impl ExportOptions {
    /// Small JPEG previews.
    pub fn thumbnail() -> Self {
        Self {
            scale: 0.5,
            format: OutputFormat::Jpeg,
            quality: 60,
        }
    }
}

/// One written image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub face: Face,
    pub thumbnail: bool,
    pub path: PathBuf,
}

pub struct Pipeline<G: Generate = Generator> {
    backend: ImgBackend,
    images: ImageMap,
    loader: ImageLoader,
    textures: TextureCache<G>,
    pan: Option<(f64, f64)>,
}

impl Pipeline<Generator> {
    pub fn new(assets_folder: impl Into<PathBuf>) -> Result<Self> {
        Self::with_textures(assets_folder, TextureCache::new())
    }
}

impl<G: Generate> Pipeline<G> {
    pub fn with_textures(assets_folder: impl Into<PathBuf>, textures: TextureCache<G>) -> Result<Self> {
        Ok(Self {
            backend: ImgBackend::new()?,
            images: ImageMap::new(assets_folder),
            loader: ImageLoader::new(),
            textures,
            pan: None,
        })
    }

    pub fn backend(&self) -> &ImgBackend {
        &self.backend
    }

    pub fn images(&self) -> &ImageMap {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageMap {
        &mut self.images
    }

    pub fn textures(&mut self) -> &mut TextureCache<G> {
        &mut self.textures
    }

    pub fn set_pan(&mut self, pan: Option<(f64, f64)>) {
        self.pan = pan;
    }

    /// Starts loading every image the card and template refer to that is not
    /// resolved yet. Returns how many loads were started.
    ///
    /// Card images are paths as given; template texture files live in the assets folder.
    pub fn prepare(&mut self, template: &Template, card: &CardData) -> usize {
        let mut requests: Vec<(&str, PathBuf)> = card
            .photo()
            .into_iter()
            .chain(card.logo())
            .map(|key| (key, PathBuf::from(key)))
            .collect();
        for layer in template.layers.iter().flatten() {
            if let Layer::Texture(texture) = layer {
                if let Some(TextureRef::File(key)) = texture.source() {
                    requests.push((key, self.images.asset_path(key)));
                }
            }
        }

        let mut started = 0;
        for (key, path) in requests {
            if self.images.contains(key) || self.loader.is_pending(key) {
                continue;
            }
            self.loader.request(key, path);
            started += 1;
        }
        started
    }

    /// Keys that finished loading since the last call. Render again when this is not empty.
    pub fn poll(&mut self) -> Vec<String> {
        self.loader.poll(&self.backend, &mut self.images)
    }

    pub fn wait(&mut self) -> Vec<String> {
        self.loader.wait(&self.backend, &mut self.images)
    }

    pub fn pending(&self) -> usize {
        self.loader.pending()
    }

    pub fn render(
        &mut self,
        template: &Template,
        card: &CardData,
        featured: &[StatKey],
        face: Face,
    ) -> Scene {
        Renderer::new(&self.images, &mut self.textures)
            .with_pan(self.pan)
            .render(template, card, featured, face)
    }

    pub fn export(&self, scene: &Scene, path: impl AsRef<Path>, options: &ExportOptions) -> Result<()> {
        let path = path.as_ref();
        let raster = scene.rasterize(options.scale)?;
        tracing::debug!(
            path = %path.display(),
            width = raster.width(),
            height = raster.height(),
            "exporting"
        );
        match options.format {
            OutputFormat::Png => raster.write_png(path),
            OutputFormat::Jpeg => self.backend.write_jpeg(&raster, path, options.quality),
        }
    }

    /// Renders and writes both faces, plus thumbnails when asked for.
    ///
    /// `name` maps a face and whether it is a thumbnail to the output path.
    pub fn export_card(
        &mut self,
        template: &Template,
        card: &CardData,
        featured: &[StatKey],
        options: &ExportOptions,
        thumbnails: Option<&ExportOptions>,
        name: impl Fn(Face, bool, OutputFormat) -> PathBuf,
    ) -> Result<Vec<Exported>> {
        let mut written = Vec::new();
        for face in Face::ALL {
            let scene = self.render(template, card, featured, face);
            let variants = std::iter::once((false, options)).chain(thumbnails.map(|t| (true, t)));
            for (thumbnail, options) in variants {
                let path = name(face, thumbnail, options.format);
                self.export(&scene, &path, options)?;
                tracing::info!("wrote {}", path.display());
                written.push(Exported {
                    face,
                    thumbnail,
                    path,
                });
            }
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert!(matches!(
            "gif".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
        assert_eq!(OutputFormat::from_path("a/b/card.jpeg").unwrap(), OutputFormat::Jpeg);
        assert!(OutputFormat::from_path("noext").is_err());
    }

    #[test]
    fn export_options_defaults() {
        let options: ExportOptions = toml::from_str("format = \"jpg\"").unwrap();
        assert_eq!(options.scale, 2.0);
        assert_eq!(options.format, OutputFormat::Jpeg);
        assert_eq!(options.quality, 80);
        assert_eq!(ExportOptions::thumbnail().scale, 0.5);
    }
}
