use crate::image::Color;
use crate::scene::{Scene, Shape};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StripLayer {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl StripLayer {
    pub fn paint(&self, scene: &mut Scene) {
        scene.push(Shape::rect(self.x, self.y, self.width, self.height).fill(self.color));
    }
}
