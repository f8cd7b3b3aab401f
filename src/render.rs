//! Turns a template and card data into a scene for either face of the card.

mod back;
mod photo;
mod stats;
mod style;

pub use photo::Placement;
pub use style::{style_for, CardStyle};

use crate::data::{CardData, StatKey};
use crate::image::{Color, ImageMap, Raster};
use crate::layer::LayerStack;
use crate::scene::{Placed, Rect, Scene, Shape, Text};
use crate::template::Template;
use crate::texture::{TextureSource, DEFAULT_SIZE};

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

pub const CARD_WIDTH: f64 = 400.0;
pub const CARD_HEIGHT: f64 = 560.0;

const LAYERED_PHOTO: Rect = Rect::new(40.0, 80.0, 320.0, 340.0);
const LAYERED_LOGO: Rect = Rect::new(330.0, 45.0, 50.0, 50.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 2] = [Face::Front, Face::Back];

    pub fn name(&self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
        }
    }
}

impl FromStr for Face {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Face::Front),
            "back" => Ok(Face::Back),
            _ => Err("expected one of `front` `back`"),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a style routine or layer may read while painting.
pub struct RenderContext<'a> {
    pub template: &'a Template,
    pub card: &'a CardData,
    pub featured: &'a [StatKey],
    pub images: &'a ImageMap,
    pub textures: &'a mut dyn TextureSource,
    pub pan: Option<(f64, f64)>,
}

impl RenderContext<'_> {
    /// Text in the template's font.
    pub fn text(&self, content: impl Into<String>, x: f64, y: f64, size: f64) -> Text {
        Text::new(content, x, y)
            .family(&self.template.font_family)
            .size(size)
    }

    /// Resolves a generated texture, logging and skipping unknown names.
    pub fn texture(&mut self, name: &str) -> Option<Rc<Raster>> {
        match self.textures.texture(name, DEFAULT_SIZE, DEFAULT_SIZE) {
            Ok(raster) => Some(raster),
            Err(e) => {
                tracing::warn!(template = %self.template.id, "skipping texture: {e}");
                None
            }
        }
    }

    /// Fills the card with the background color.
    pub fn background(&self, scene: &mut Scene, radius: f64) {
        scene.push(
            Shape::rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
                .radius(radius)
                .fill(self.template.background_color),
        );
    }

    /// Places the player photo so it covers `clip`, honoring the pan position.
    pub fn photo(&self, scene: &mut Scene, clip: Rect) {
        let Some(image) = self.card.photo().and_then(|key| self.images.get(key)) else {
            return;
        };
        let mut placement = Placement::cover(image.width() as f64, image.height() as f64, clip);
        if let Some((x, y)) = self.pan {
            placement = placement.moved_to(x, y, clip);
        }
        scene.clip(clip, vec![Placed::new(image, placement.rect()).into()]);
    }

    pub fn logo(&self, rect: Rect) -> Option<Placed> {
        let image = self.card.logo().and_then(|key| self.images.get(key))?;
        Some(Placed::new(image, rect))
    }

    pub fn name(&self) -> &str {
        &self.card.player_name
    }

    pub fn team(&self) -> &str {
        &self.card.team_name
    }
}

/// Renders card faces from already resolved images and textures.
///
/// Images that are not in the map yet are left out; render again once they load.
pub struct Renderer<'a> {
    images: &'a ImageMap,
    textures: &'a mut dyn TextureSource,
    pan: Option<(f64, f64)>,
}

impl<'a> Renderer<'a> {
    pub fn new(images: &'a ImageMap, textures: &'a mut dyn TextureSource) -> Self {
        Self {
            images,
            textures,
            pan: None,
        }
    }

    /// Moves the top left corner of the scaled photo, clamped so it still covers its frame.
    pub fn with_pan(mut self, pan: Option<(f64, f64)>) -> Self {
        self.pan = pan;
        self
    }

    pub fn render(
        &mut self,
        template: &Template,
        card: &CardData,
        featured: &[StatKey],
        face: Face,
    ) -> Scene {
        let mut scene = Scene::new(CARD_WIDTH, CARD_HEIGHT);
        let mut ctx = RenderContext {
            template,
            card,
            featured,
            images: self.images,
            textures: &mut *self.textures,
            pan: self.pan,
        };
        match (face, &template.layers) {
            (Face::Back, _) => back::paint(&mut scene, &ctx),
            (Face::Front, Some(layers)) => {
                ctx.background(&mut scene, 10.0);
                LayerStack(layers).paint(&mut scene, &mut ctx);
                ctx.photo(&mut scene, LAYERED_PHOTO);
                if let Some(logo) = ctx.logo(LAYERED_LOGO) {
                    scene.push(logo);
                }
                stats::paint_featured(&mut scene, &ctx);
            }
            (Face::Front, None) => style_for(&template.id).paint(&mut scene, &mut ctx),
        }
        tracing::debug!(
            template = %template.id,
            face = %face,
            commands = scene.commands.len(),
            "rendered card"
        );
        scene
    }
}

pub(crate) fn white(alpha: f64) -> Color {
    Color::WHITE.with_alpha(alpha)
}
