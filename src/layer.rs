//! Declarative layers painted in order on layered templates.

mod banner;
mod border;
mod strip;
mod texture;

pub use banner::BannerLayer;
pub use border::BorderLayer;
pub use strip::StripLayer;
pub use texture::{TextureLayer, TextureRef};

use crate::render::RenderContext;
use crate::scene::Scene;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Layer {
    Texture(TextureLayer),
    Border(BorderLayer),
    AccentStrip(StripLayer),
    TeamBanner(BannerLayer),
    NameBanner(BannerLayer),
}

impl Layer {
    pub fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        match self {
            Layer::Texture(layer) => layer.paint(scene, ctx),
            Layer::Border(layer) => layer.paint(scene),
            Layer::AccentStrip(layer) => layer.paint(scene),
            Layer::TeamBanner(layer) => layer.paint_team(scene, ctx),
            Layer::NameBanner(layer) => layer.paint_name(scene, ctx),
        }
    }
}

#[derive(Debug)]
pub struct LayerStack<'a>(pub &'a [Layer]);

impl<'a> LayerStack<'a> {
    pub fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let LayerStack(layers) = self;
        for layer in layers.iter() {
            layer.paint(scene, ctx);
        }
    }
}
