use crate::image::Color;
use crate::render::{CARD_HEIGHT, CARD_WIDTH};
use crate::scene::{Rect, Scene, Shape, Stroke};

use serde::Deserialize;

const RADIUS: f64 = 8.0;

/// A stroked rounded frame. Missing sizes are inset by `x`/`y` on both sides of the card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BorderLayer {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub inner_width: Option<f64>,
    pub inner_height: Option<f64>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    pub color: Color,
}

const fn default_stroke_width() -> f64 {
    2.0
}

impl BorderLayer {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.inner_width.unwrap_or(CARD_WIDTH - 2.0 * self.x),
            self.inner_height.unwrap_or(CARD_HEIGHT - 2.0 * self.y),
        )
    }

    pub fn paint(&self, scene: &mut Scene) {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.rect();
        scene.push(
            Shape::rect(x, y, width, height)
                .radius(RADIUS)
                .stroke(Stroke::new(self.stroke_width, self.color)),
        );
    }
}
