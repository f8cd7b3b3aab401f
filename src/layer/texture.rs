//! Represents a texture fill, either generated or loaded from the assets.

use crate::render::{RenderContext, CARD_HEIGHT, CARD_WIDTH};
use crate::scene::{Paint, Scene, Shape};

use serde::Deserialize;

const RADIUS: f64 = 10.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureRef<'a> {
    Generated(&'a str),
    File(&'a str),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextureLayer {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub texture: Option<String>,
    pub texture_file: Option<String>,
}

impl TextureLayer {
    /// A generated texture covering the whole card.
    pub fn generated(name: impl Into<String>) -> Self {
        Self {
            texture: Some(name.into()),
            ..Default::default()
        }
    }

    /// The texture file wins when both are given.
    pub fn source(&self) -> Option<TextureRef<'_>> {
        match (&self.texture_file, &self.texture) {
            (Some(file), _) => Some(TextureRef::File(file)),
            (None, Some(name)) => Some(TextureRef::Generated(name)),
            (None, None) => None,
        }
    }

    pub fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let image = match self.source() {
            Some(TextureRef::File(path)) => {
                let image = ctx.images.get(path);
                if image.is_none() {
                    tracing::debug!(path, "texture file not loaded yet, skipping layer");
                }
                image
            }
            Some(TextureRef::Generated(name)) => ctx.texture(name),
            None => {
                tracing::warn!("texture layer names no texture, skipping");
                None
            }
        };
        let Some(image) = image else {
            return;
        };
        let width = self.width.unwrap_or(CARD_WIDTH);
        let height = self.height.unwrap_or(CARD_HEIGHT);
        let scale = (
            width / image.width() as f64,
            height / image.height() as f64,
        );
        scene.push(
            Shape::rect(self.x, self.y, width, height)
                .radius(RADIUS)
                .fill(Paint::Pattern { image, scale }),
        );
    }
}
