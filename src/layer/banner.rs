//! Team and name banners: a filled bar with one line of text.

use crate::image::Color;
use crate::render::RenderContext;
use crate::scene::{Scene, Shape};
use crate::text::FontStyle;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BannerLayer {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub background_color: Color,
    pub text_color: Option<Color>,
    pub text_style: Option<FontStyle>,
}

impl BannerLayer {
    fn paint_banner(
        &self,
        scene: &mut Scene,
        ctx: &RenderContext,
        content: &str,
        (size, lift): (f64, f64),
        style: FontStyle,
    ) {
        scene.push(
            Shape::rect(self.x, self.y, self.width, self.height)
                .radius(2.0)
                .fill(self.background_color),
        );
        let y = self.y + self.height / 2.0 - lift;
        scene.push(
            ctx.text(content, self.x + 5.0, y, size)
                .style(self.text_style.unwrap_or(style))
                .color(self.text_color.unwrap_or(Color::BLACK)),
        );
    }

    pub fn paint_team(&self, scene: &mut Scene, ctx: &RenderContext) {
        let team = ctx.card.team_name.as_str();
        let content = if team.is_empty() { "TEAM" } else { team };
        self.paint_banner(scene, ctx, content, (16.0, 8.0), FontStyle::ITALIC);
    }

    pub fn paint_name(&self, scene: &mut Scene, ctx: &RenderContext) {
        let name = ctx.card.player_name.as_str();
        let content = if name.is_empty() { "PLAYER NAME" } else { name };
        self.paint_banner(scene, ctx, content, (18.0, 10.0), FontStyle::BOLD);
    }
}
